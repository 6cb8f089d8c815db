//! Reschedule dialog for upcoming orders.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::domain::{Order, RESCHEDULE_SLOTS, TimeSlot};

/// Why a reschedule cannot be confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RescheduleError {
    #[error("no order is being rescheduled")]
    NotOpen,
    #[error("choose a new date")]
    DateRequired,
    #[error("{date} is in the past (today is {today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },
    #[error("choose a new time")]
    TimeRequired,
    #[error("{time} is not an offered reschedule time")]
    UnofferedTime { time: TimeSlot },
    #[error("reschedule is open for order {expected}, not {actual}")]
    OrderMismatch { expected: String, actual: String },
}

/// Reschedule dialog state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RescheduleFlow {
    order_id: Option<String>,
    date: Option<NaiveDate>,
    time: Option<TimeSlot>,
}

impl RescheduleFlow {
    /// Opens the dialog for `order_id` with no date or time chosen.
    ///
    /// Opening again for any order discards earlier choices.
    pub fn open(&mut self, order_id: impl Into<String>) {
        *self = Self {
            order_id: Some(order_id.into()),
            ..Self::default()
        };
    }

    /// Cancels the dialog and forgets its choices.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// The order being moved, while the dialog is open.
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// Whether the dialog is showing.
    pub fn is_open(&self) -> bool {
        self.order_id.is_some()
    }

    /// Half-hourly times offered by the dialog.
    pub fn time_slots(&self) -> &'static [TimeSlot] {
        &RESCHEDULE_SLOTS
    }

    /// Records a date. Past dates are accepted here and refused on submit.
    pub fn choose_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// Records a time.
    ///
    /// # Errors
    ///
    /// [`RescheduleError::UnofferedTime`] when `time` is not in
    /// [`time_slots`](Self::time_slots).
    pub fn pick_time(&mut self, time: TimeSlot) -> Result<(), RescheduleError> {
        if !time.is_reschedulable() {
            return Err(RescheduleError::UnofferedTime { time });
        }
        self.time = Some(time);
        Ok(())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<TimeSlot> {
        self.time
    }

    /// Confirm stays disabled until a non-past date and a time are chosen.
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        self.check(today).is_ok()
    }

    /// Moves `order` to the chosen slot and closes the dialog.
    pub fn submit(&mut self, order: &Order, today: NaiveDate) -> Result<Order, RescheduleError> {
        let (date, time) = self.check(today)?;
        let expected = self.order_id.as_deref().unwrap_or_default();
        if expected != order.id() {
            return Err(RescheduleError::OrderMismatch {
                expected: expected.to_owned(),
                actual: order.id().to_owned(),
            });
        }
        info!(
            order_id = %order.id(),
            from_date = %order.date(),
            to_date = %date,
            to_time = %time,
            "order rescheduled"
        );
        let moved = order.rescheduled(date, time);
        self.close();
        Ok(moved)
    }

    fn check(&self, today: NaiveDate) -> Result<(NaiveDate, TimeSlot), RescheduleError> {
        if self.order_id.is_none() {
            return Err(RescheduleError::NotOpen);
        }
        let date = self.date.ok_or(RescheduleError::DateRequired)?;
        if date < today {
            return Err(RescheduleError::DateInPast { date, today });
        }
        let time = self.time.ok_or(RescheduleError::TimeRequired)?;
        Ok((date, time))
    }
}
