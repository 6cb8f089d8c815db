//! Service catalogue domain types.
//!
//! These types model the bookable services offered by pool-care companies
//! as validated, immutable entities, together with the sort keys the
//! catalogue screen offers.

use std::fmt;

mod service;
mod sort;


pub use service::{Service, ServiceCatalogue, ServiceDraft};
pub use sort::{ParseSortKeyError, ServiceSortKey};

/// Validation errors returned by catalogue constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueValidationError {
    EmptyField { field: &'static str },
    NegativeValue { field: &'static str, value: i32 },
    DuplicateServiceId { id: String },
}

impl fmt::Display for CatalogueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::NegativeValue { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            Self::DuplicateServiceId { id } => {
                write!(f, "service id '{id}' appears more than once in the catalogue")
            }
        }
    }
}

impl std::error::Error for CatalogueValidationError {}
