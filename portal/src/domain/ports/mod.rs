//! Outbound ports the portal core hands work to.

mod macros;
pub(crate) use macros::define_port_error;

mod booking_handoff;

#[cfg(test)]
pub use booking_handoff::MockBookingHandoff;
pub use booking_handoff::{BookingHandoff, BookingHandoffError, LoggingBookingHandoff};
