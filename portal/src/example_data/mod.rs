//! Startup loading of the seed registry into domain values.

mod convert;
mod startup;

pub use convert::{ConversionError, PortalCatalogue};
pub use startup::{StartupError, load_catalogue, load_portal_catalogue};
