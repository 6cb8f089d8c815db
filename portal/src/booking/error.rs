use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{BookingHandoffError, TimeSlot};

/// Why a wizard action was refused. The wizard is unchanged after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingStepError {
    #[error("select a pool to continue")]
    PoolRequired,
    #[error("pool '{id}' is not one of the customer's pools")]
    UnknownPool { id: String },
    #[error("choose a date to continue")]
    DateRequired,
    #[error("{date} is in the past (today is {today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },
    #[error("pick a time to continue")]
    TimeRequired,
    #[error("{time} is not an offered booking time")]
    UnofferedTime { time: TimeSlot },
    #[error("{field} cannot be edited on step {step}")]
    FieldNotEditable { field: &'static str, step: u8 },
    #[error("already on the first step")]
    AtFirstStep,
    #[error("the booking is already confirmed")]
    AlreadyConfirmed,
    #[error("booking handoff failed: {0}")]
    Handoff(#[from] BookingHandoffError),
}
