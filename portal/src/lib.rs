//! Core of the pool-service customer portal.
//!
//! Everything a view needs to render and mutate the portal lives here as
//! plain state: immutable domain values, the filter/sort/tab engine, the
//! booking wizard, detail and dialog controllers, and the navigation shell.
//! Master lists are loaded once from a seed registry at startup.

pub mod booking;
pub mod config;
pub mod domain;
pub mod example_data;
pub mod listing;
pub mod screens;
pub mod selection;
pub mod shell;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
