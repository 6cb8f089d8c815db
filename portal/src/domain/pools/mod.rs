//! Customer pool inventory.
//!
//! A [`Pool`] records where a pool is, how it is built and when it was last
//! and will next be serviced. Pools are edited through a [`PoolEditForm`]
//! that yields a replacement value rather than mutating in place.

use std::fmt;

use chrono::NaiveDate;

use super::rating::RatingValueError;

mod edit_form;
mod pool;


pub use edit_form::{
    COUNTRY_OPTIONS, EQUIPMENT_OPTIONS, HEATER_OPTIONS, PoolEditError, PoolEditForm, PoolField,
};
pub use pool::{Pool, PoolAddress, PoolDraft, ServiceVisit, WaterSystem};

/// Validation errors returned by [`Pool::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolValidationError {
    EmptyField {
        field: &'static str,
    },
    /// The next service is scheduled before the last one happened.
    NextServiceBeforeLastService {
        last_service: NaiveDate,
        next_service: NaiveDate,
    },
    VisitRating(RatingValueError),
}

impl fmt::Display for PoolValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::NextServiceBeforeLastService {
                last_service,
                next_service,
            } => write!(
                f,
                "next service ({next_service}) must not precede last service ({last_service})"
            ),
            Self::VisitRating(error) => write!(f, "service history: {error}"),
        }
    }
}

impl std::error::Error for PoolValidationError {}

impl From<RatingValueError> for PoolValidationError {
    fn from(value: RatingValueError) -> Self {
        Self::VisitRating(value)
    }
}
