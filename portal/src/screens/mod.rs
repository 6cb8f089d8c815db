//! Per-screen state: the contract between view components and the core.
//!
//! Each screen owns its master list and the private state derived from it.
//! Screens take their inputs from a
//! [`PortalCatalogue`](crate::example_data::PortalCatalogue) and never share
//! mutable state with one another.

mod account;
mod dashboard;
mod messages;
mod orders;
mod pools;
mod services;

pub use account::AccountScreen;
pub use dashboard::{DashboardScreen, DashboardSnapshot, UpcomingVisit};
pub use messages::MessagesScreen;
pub use orders::{OrderActionError, OrdersScreen};
pub use pools::{PoolActionError, PoolViewMode, PoolsScreen};
pub use services::ServicesScreen;
