//! Seed registry types and JSON parsing.
//!
//! This module defines the seed registry structure that holds every master
//! list the portal renders. The registry is loaded from JSON, validated once,
//! and then exposes read-only slices.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;
use crate::seed::{
    CouponSeed, MessageSeed, OrderSeed, PointsEntrySeed, PoolSeed, ProfileSeed, ServiceSeed,
    TierSeed,
};
use crate::validation::ensure_unique_ids;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A seed registry containing the portal's master lists.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "pointsBalance": 1247,
///     "services": [{
///         "id": "cleaning-1",
///         "name": "Pool Cleaning",
///         "company": "AquaPro Services",
///         "description": "Complete pool cleaning",
///         "price": 85,
///         "duration": "1-2 hours",
///         "popular": true,
///         "createdAt": "2024-01-15"
///     }],
///     "tiers": [{"name": "Basic", "color": "gray", "pointsRequired": 0}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.services().len(), 1);
/// assert_eq!(registry.points_balance(), 1247);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRegistry {
    version: u32,
    points_balance: u32,
    profile: ProfileSeed,
    services: Vec<ServiceSeed>,
    pools: Vec<PoolSeed>,
    orders: Vec<OrderSeed>,
    messages: Vec<MessageSeed>,
    tiers: Vec<TierSeed>,
    coupons: Vec<CouponSeed>,
    points_history: Vec<PointsEntrySeed>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    /// - The services or tiers arrays are empty
    /// - Any collection holds a blank or repeated id
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.services.is_empty() {
            return Err(RegistryError::EmptyServices);
        }
        if raw.tiers.is_empty() {
            return Err(RegistryError::EmptyTiers);
        }

        ensure_unique_ids("services", raw.services.iter().map(|s| s.id.as_str()))?;
        ensure_unique_ids("pools", raw.pools.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("orders", raw.orders.iter().map(|o| o.id.as_str()))?;
        ensure_unique_ids("messages", raw.messages.iter().map(|m| m.id.as_str()))?;
        ensure_unique_ids("coupons", raw.coupons.iter().map(|c| c.id.as_str()))?;
        ensure_unique_ids("tiers", raw.tiers.iter().map(|t| t.name.as_str()))?;

        Ok(Self {
            version: raw.version,
            points_balance: raw.points_balance,
            profile: raw.profile,
            services: raw.services,
            pools: raw.pools,
            orders: raw.orders,
            messages: raw.messages,
            tiers: raw.tiers,
            coupons: raw.coupons,
            points_history: raw.points_history,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the customer's reward points balance.
    #[must_use]
    pub const fn points_balance(&self) -> u32 {
        self.points_balance
    }

    /// Returns the customer profile.
    #[must_use]
    pub const fn profile(&self) -> &ProfileSeed {
        &self.profile
    }

    /// Returns the service catalogue.
    #[must_use]
    pub fn services(&self) -> &[ServiceSeed] {
        &self.services
    }

    /// Returns the customer's pools.
    #[must_use]
    pub fn pools(&self) -> &[PoolSeed] {
        &self.pools
    }

    /// Returns the order history.
    #[must_use]
    pub fn orders(&self) -> &[OrderSeed] {
        &self.orders
    }

    /// Returns the inbox.
    #[must_use]
    pub fn messages(&self) -> &[MessageSeed] {
        &self.messages
    }

    /// Returns the membership tiers in registry order.
    #[must_use]
    pub fn tiers(&self) -> &[TierSeed] {
        &self.tiers
    }

    /// Returns the redeemable coupons.
    #[must_use]
    pub fn coupons(&self) -> &[CouponSeed] {
        &self.coupons
    }

    /// Returns the reward points ledger.
    #[must_use]
    pub fn points_history(&self) -> &[PointsEntrySeed] {
        &self.points_history
    }

    /// Finds a service by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ServiceNotFound`] if no service with the given
    /// id exists.
    pub fn find_service(&self, id: &str) -> Result<&ServiceSeed, RegistryError> {
        self.services
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| RegistryError::ServiceNotFound { id: id.to_owned() })
    }
}

/// Raw registry structure for JSON deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    #[serde(default)]
    points_balance: u32,
    #[serde(default)]
    profile: ProfileSeed,
    services: Vec<ServiceSeed>,
    #[serde(default)]
    pools: Vec<PoolSeed>,
    #[serde(default)]
    orders: Vec<OrderSeed>,
    #[serde(default)]
    messages: Vec<MessageSeed>,
    tiers: Vec<TierSeed>,
    #[serde(default)]
    coupons: Vec<CouponSeed>,
    #[serde(default)]
    points_history: Vec<PointsEntrySeed>,
}
