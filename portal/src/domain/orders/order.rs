//! Order entity, status and timeline.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::OrderValidationError;
use super::pricing::{final_price, points_value};
use crate::domain::rating::StarRating;
use crate::domain::time_slot::TimeSlot;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 3] = [Self::Upcoming, Self::Completed, Self::Cancelled];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Tab and badge label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown order status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrderStatusError {
    /// The unrecognised input value.
    pub input: String,
}

impl fmt::Display for ParseOrderStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status: {}", self.input)
    }
}

impl std::error::Error for ParseOrderStatusError {}

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseOrderStatusError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Technician assigned to an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technician {
    pub name: String,
    pub phone: String,
    /// Average customer rating, 0.0 to 5.0.
    pub rating: f32,
}

/// One step of an order's progress timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub status: String,
    pub completed: bool,
}

/// Input payload for [`Order::new`].
///
/// When `final_price` is `None` the charge is computed from the pricing
/// rule; when it is supplied it must agree with that rule.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub id: String,
    pub service: String,
    pub company: String,
    pub pool: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub technician: Technician,
    pub status: OrderStatus,
    pub price: i32,
    pub discount: i32,
    pub points_applied: i32,
    pub final_price: Option<i32>,
    pub notes: String,
    pub timeline: Vec<TimelineEntry>,
    pub photos: Vec<String>,
    pub rating: Option<StarRating>,
}

/// A booked service visit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: String,
    service: String,
    company: String,
    pool: String,
    date: NaiveDate,
    time: TimeSlot,
    technician: Technician,
    status: OrderStatus,
    price: i32,
    discount: i32,
    points_applied: i32,
    final_price: i32,
    notes: String,
    timeline: Vec<TimelineEntry>,
    photos: Vec<String>,
    rating: Option<StarRating>,
}

impl Order {
    /// Validate and construct an order.
    pub fn new(draft: OrderDraft) -> Result<Self, OrderValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }
    pub fn service(&self) -> &str {
        self.service.as_str()
    }
    pub fn company(&self) -> &str {
        self.company.as_str()
    }
    /// Name of the serviced pool.
    pub fn pool(&self) -> &str {
        self.pool.as_str()
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn time(&self) -> TimeSlot {
        self.time
    }
    pub fn technician(&self) -> &Technician {
        &self.technician
    }
    pub fn status(&self) -> OrderStatus {
        self.status
    }
    pub fn price(&self) -> i32 {
        self.price
    }
    pub fn discount(&self) -> i32 {
        self.discount
    }
    pub fn points_applied(&self) -> i32 {
        self.points_applied
    }
    /// Amount charged, as given by [`final_price`](super::final_price).
    pub fn final_price(&self) -> i32 {
        self.final_price
    }
    pub fn notes(&self) -> &str {
        self.notes.as_str()
    }
    /// Progress entries in display order.
    pub fn timeline(&self) -> &[TimelineEntry] {
        self.timeline.as_slice()
    }
    pub fn photos(&self) -> &[String] {
        self.photos.as_slice()
    }
    /// The customer's rating, once one is submitted.
    pub fn rating(&self) -> Option<StarRating> {
        self.rating
    }

    /// Whether the customer may still rate the visit.
    pub fn can_rate(&self) -> bool {
        self.status == OrderStatus::Completed && self.rating.is_none()
    }

    /// Whether the visit may be moved to another slot.
    pub fn can_reschedule(&self) -> bool {
        self.status == OrderStatus::Upcoming
    }

    /// Returns a copy of the order carrying the customer's rating.
    #[must_use]
    pub fn with_rating(&self, rating: StarRating) -> Self {
        Self {
            rating: Some(rating),
            ..self.clone()
        }
    }

    /// Returns a copy of the order moved to a new date and time.
    #[must_use]
    pub fn rescheduled(&self, date: NaiveDate, time: TimeSlot) -> Self {
        Self {
            date,
            time,
            ..self.clone()
        }
    }
}

impl TryFrom<OrderDraft> for Order {
    type Error = OrderValidationError;

    fn try_from(draft: OrderDraft) -> Result<Self, Self::Error> {
        for (value, field) in [(&draft.id, "order.id"), (&draft.service, "order.service")] {
            if value.trim().is_empty() {
                return Err(OrderValidationError::EmptyField { field });
            }
        }
        for (value, field) in [
            (draft.price, "order.price"),
            (draft.discount, "order.discount"),
            (draft.points_applied, "order.points_applied"),
        ] {
            if value < 0 {
                return Err(OrderValidationError::NegativeValue { field, value });
            }
        }
        let deductions = draft
            .discount
            .checked_add(points_value(draft.points_applied))
            .ok_or(OrderValidationError::DeductionsOverflow {
                discount: draft.discount,
                points_applied: draft.points_applied,
            })?;
        if deductions > draft.price {
            return Err(OrderValidationError::DeductionsExceedPrice {
                price: draft.price,
                deductions,
            });
        }
        let expected = final_price(
            draft.status,
            draft.price,
            draft.discount,
            draft.points_applied,
        );
        if let Some(actual) = draft.final_price.filter(|actual| *actual != expected) {
            return Err(OrderValidationError::FinalPriceMismatch { expected, actual });
        }
        let rating = draft.technician.rating;
        if !(0.0..=5.0).contains(&rating) {
            return Err(OrderValidationError::InvalidTechnicianRating { rating });
        }

        Ok(Self {
            id: draft.id,
            service: draft.service,
            company: draft.company,
            pool: draft.pool,
            date: draft.date,
            time: draft.time,
            technician: draft.technician,
            status: draft.status,
            price: draft.price,
            discount: draft.discount,
            points_applied: draft.points_applied,
            final_price: expected,
            notes: draft.notes,
            timeline: draft.timeline,
            photos: draft.photos,
            rating: draft.rating,
        })
    }
}
