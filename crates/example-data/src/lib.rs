//! Seed registry of example records for the pool-service customer portal.
//!
//! This crate loads the portal's master lists (services, pools, orders,
//! messages, membership tiers, coupons, and the reward points ledger) from a
//! versioned JSON registry. It is designed to be independent of the portal's
//! domain types to avoid circular dependencies: records are plain data and
//! the portal validates them when converting to domain values.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries from JSON strings or files
//! - Version and collection checks (non-empty catalogue, unique ids)
//! - Lookups by service id
//!
//! # Example
//!
//! ```
//! use example_data::SeedRegistry;
//!
//! let json = r#"{
//!     "version": 1,
//!     "services": [{
//!         "id": "chemical-1",
//!         "name": "Chemical Balance",
//!         "company": "AquaPro Services",
//!         "description": "Water testing and chemical adjustment",
//!         "price": 45,
//!         "duration": "30-45 mins",
//!         "createdAt": "2024-01-12"
//!     }],
//!     "tiers": [{"name": "Basic", "color": "gray", "pointsRequired": 0}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let service = registry.find_service("chemical-1").expect("service exists");
//!
//! assert_eq!(service.price, 45);
//! assert!(!service.popular);
//! ```

mod error;
mod registry;
mod seed;
mod validation;

pub use error::RegistryError;
pub use registry::SeedRegistry;
pub use seed::{
    CouponSeed, MessageSeed, OrderSeed, PointsEntrySeed, PoolSeed, ProfileSeed,
    ServiceHistorySeed, ServiceSeed, TechnicianSeed, TierSeed, TimelineSeed,
};
pub use validation::ensure_unique_ids;
