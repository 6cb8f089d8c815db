//! Seed record types.
//!
//! This module defines the raw records carried by a seed registry. These
//! types are independent of the portal's domain types: enumerated values
//! such as order status or message type stay as strings and are parsed and
//! validated at the point of use.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bookable service offered by a pool-care company.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use example_data::ServiceSeed;
///
/// let service = ServiceSeed {
///     id: "cleaning-1".to_owned(),
///     name: "Pool Cleaning".to_owned(),
///     company: "AquaPro Services".to_owned(),
///     description: "Skimming, vacuuming, and brushing".to_owned(),
///     price: 85,
///     duration: "1-2 hours".to_owned(),
///     popular: true,
///     created_at: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
///     features: vec!["Vacuuming".to_owned()],
/// };
///
/// assert_eq!(service.price, 85);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSeed {
    /// Unique service identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Company providing the service.
    pub company: String,
    /// Long-form description.
    pub description: String,
    /// Price in whole currency units.
    pub price: i32,
    /// Free-text duration estimate.
    pub duration: String,
    /// Whether the service is flagged as popular.
    #[serde(default)]
    pub popular: bool,
    /// Date the service was added to the catalogue.
    pub created_at: NaiveDate,
    /// Bullet-point feature list.
    #[serde(default)]
    pub features: Vec<String>,
}

/// One past service visit recorded against a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHistorySeed {
    /// Visit date.
    pub date: NaiveDate,
    /// Service name.
    pub service: String,
    /// Technician who performed the visit.
    pub technician: String,
    /// Star rating left for the visit.
    pub rating: u8,
}

/// A customer's pool or spa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSeed {
    /// Unique pool identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// First address line.
    pub address: String,
    /// Second address line.
    #[serde(default)]
    pub address2: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
    /// Country.
    pub country: String,
    /// Free-text dimensions, for example `20ft x 40ft`.
    pub size: String,
    /// Water volume in gallons.
    pub gallons: u32,
    /// Water system, for example `Saltwater`.
    pub water_system: String,
    /// Heater type.
    #[serde(default)]
    pub heater_type: String,
    /// Installed equipment.
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Owner notes.
    #[serde(default)]
    pub notes: String,
    /// Date of the most recent service.
    pub last_service: Option<NaiveDate>,
    /// Date of the next scheduled service.
    pub next_service: Option<NaiveDate>,
    /// Past visits, most recent first.
    #[serde(default)]
    pub service_history: Vec<ServiceHistorySeed>,
}

/// The technician assigned to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianSeed {
    /// Technician name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Average customer rating between 0.0 and 5.0.
    pub rating: f32,
}

/// One step of an order's progress timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSeed {
    /// Date of the step.
    pub date: NaiveDate,
    /// Time of day in `h:MM AM` form.
    pub time: String,
    /// Human-readable step label.
    pub status: String,
    /// Whether the step has happened.
    pub completed: bool,
}

/// A placed service order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSeed {
    /// Unique order identifier, for example `ORD-001`.
    pub id: String,
    /// Name of the ordered service.
    pub service: String,
    /// Company providing the service.
    pub company: String,
    /// Name of the pool being serviced.
    pub pool: String,
    /// Appointment date.
    pub date: NaiveDate,
    /// Appointment time in `h:MM AM` form.
    pub time: String,
    /// Assigned technician.
    pub technician: TechnicianSeed,
    /// One of `upcoming`, `completed` or `cancelled`.
    pub status: String,
    /// List price in whole currency units.
    pub price: i32,
    /// Discount in whole currency units.
    #[serde(default)]
    pub discount: i32,
    /// Reward points spent on the order.
    #[serde(default)]
    pub points_applied: i32,
    /// Amount charged in whole currency units.
    pub final_price: i32,
    /// Customer notes.
    #[serde(default)]
    pub notes: String,
    /// Progress timeline in display order.
    #[serde(default)]
    pub timeline: Vec<TimelineSeed>,
    /// Photo references captured during the visit.
    #[serde(default)]
    pub photos: Vec<String>,
    /// Customer rating left after completion.
    #[serde(default)]
    pub rating: Option<u8>,
}

/// An inbox message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSeed {
    /// Unique message identifier.
    pub id: String,
    /// One of `system` or `promotion`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Message title.
    pub title: String,
    /// Message body.
    pub description: String,
    /// Date the message was sent.
    pub date: NaiveDate,
    /// Time of day in `h:MM AM` form.
    pub time: String,
    /// Whether the customer has read the message.
    pub read: bool,
    /// One of `normal` or `high`.
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    "normal".to_owned()
}

/// A membership tier on the rewards ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSeed {
    /// Tier name.
    pub name: String,
    /// Presentation colour token.
    pub color: String,
    /// Points balance required to reach the tier.
    pub points_required: u32,
    /// Benefits unlocked by the tier.
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// A coupon that can be bought with reward points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponSeed {
    /// Unique coupon identifier.
    pub id: String,
    /// Coupon title.
    pub title: String,
    /// Coupon description.
    pub description: String,
    /// Points needed to redeem the coupon.
    pub points_cost: u32,
    /// Last day the coupon can be used.
    pub expiry_date: NaiveDate,
    /// Redemption code.
    pub code: String,
}

/// One entry in the reward points ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsEntrySeed {
    /// Date of the entry.
    pub date: NaiveDate,
    /// What earned or spent the points.
    pub description: String,
    /// Signed points delta.
    pub points: i32,
    /// One of `earned` or `redeemed`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// The signed-in customer's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSeed {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Postal address on a single line.
    #[serde(default)]
    pub address: String,
}
