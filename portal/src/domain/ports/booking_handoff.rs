//! Port receiving confirmed bookings from the wizard.

use tracing::info;

use super::define_port_error;
use crate::domain::BookingRequest;

define_port_error! {
    /// Errors raised while handing a booking off.
    pub enum BookingHandoffError {
        /// The receiving service refused the booking.
        Rejected { reason: String } => "booking handoff rejected: {reason}",
        /// Nothing is available to receive bookings.
        Unavailable {} => "booking handoff is unavailable",
    }
}

/// Receives each booking the wizard confirms.
#[cfg_attr(test, mockall::automock)]
pub trait BookingHandoff: Send + Sync {
    fn submit(&self, request: &BookingRequest) -> Result<(), BookingHandoffError>;
}

/// Adapter that records bookings in the log and accepts them all.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBookingHandoff;

impl BookingHandoff for LoggingBookingHandoff {
    fn submit(&self, request: &BookingRequest) -> Result<(), BookingHandoffError> {
        info!(
            confirmation_id = %request.confirmation_id,
            service_id = %request.service_id,
            pool_id = %request.pool_id,
            date = %request.date,
            time = %request.time,
            "booking handed off"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeSlot;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    fn logging_adapter_accepts_every_booking() {
        let request = BookingRequest {
            confirmation_id: "ORD-000001".to_owned(),
            service_id: "1".to_owned(),
            service_name: "Pool Cleaning".to_owned(),
            company: "AquaPro Services".to_owned(),
            price: 85,
            pool_id: "spa".to_owned(),
            pool_name: "Spa".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 1, 17).expect("valid date"),
            time: TimeSlot::at(10, 0),
            notes: String::new(),
        };
        assert_eq!(LoggingBookingHandoff.submit(&request), Ok(()));
    }
}
