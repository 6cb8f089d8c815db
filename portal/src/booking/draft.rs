//! Ephemeral wizard input.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Pool, TimeSlot};

/// A pool the customer can book for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolChoice {
    /// Identifier recorded on the draft.
    pub id: String,
    /// Label shown on the pool step.
    pub name: String,
}

impl From<&Pool> for PoolChoice {
    fn from(pool: &Pool) -> Self {
        Self {
            id: pool.id().to_owned(),
            name: pool.name().to_owned(),
        }
    }
}

/// Values entered so far. Lives only as long as the open wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    /// Chosen on step one.
    pub pool_id: Option<String>,
    /// Chosen on step two; must not be before today to advance.
    pub date: Option<NaiveDate>,
    /// Chosen on step three from the offered slots.
    pub time: Option<TimeSlot>,
    /// Optional free text from the review step.
    pub notes: String,
}

impl BookingDraft {
    /// Whether nothing has been entered yet.
    pub fn is_blank(&self) -> bool {
        self.pool_id.is_none() && self.date.is_none() && self.time.is_none() && self.notes.is_empty()
    }
}
