//! The service booking wizard.
//!
//! Booking runs through five linear steps: pool, date, time, review and
//! confirmation. Each forward move is gated on the current step's required
//! input; rejected moves leave the wizard untouched and say why. Confirming
//! hands the finished [`BookingRequest`](crate::domain::BookingRequest) to a
//! [`BookingHandoff`](crate::domain::BookingHandoff) port.

mod draft;
mod error;
mod step;
mod wizard;


pub use draft::{BookingDraft, PoolChoice};
pub use error::BookingStepError;
pub use step::WizardStep;
pub use wizard::{BookingWizard, confirmation_id};
