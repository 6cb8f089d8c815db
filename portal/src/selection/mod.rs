//! Detail-view selection and the rating and reschedule sub-flows.
//!
//! Each list screen holds at most one selected record. Opening another
//! record replaces the selection rather than stacking dialogs. Rating and
//! rescheduling keep their own active record and ephemeral form values.

mod detail;
mod rating;
mod reschedule;

#[cfg(test)]
mod tests;

pub use detail::DetailSelection;
pub use rating::{RatingError, RatingFlow};
pub use reschedule::{RescheduleError, RescheduleFlow};
