//! The finalised booking handed off when the wizard completes.

use chrono::NaiveDate;
use serde::Serialize;

use super::time_slot::TimeSlot;

/// A confirmed booking, ready for order creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Display identifier shown on the confirmation step, e.g. `ORD-482913`.
    pub confirmation_id: String,
    pub service_id: String,
    pub service_name: String,
    pub company: String,
    pub price: i32,
    pub pool_id: String,
    pub pool_name: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    /// Free-text instructions; empty when none were given.
    pub notes: String,
}
