//! Service orders and their pricing.
//!
//! Orders are immutable records of a booked visit. Rating and rescheduling
//! produce new [`Order`] values; nothing edits an order in place.

use std::fmt;

mod order;
mod pricing;

#[cfg(test)]
mod tests;

pub use order::{Order, OrderDraft, OrderStatus, ParseOrderStatusError, Technician, TimelineEntry};
pub use pricing::{POINTS_PER_CURRENCY_UNIT, final_price, points_value};

/// Validation errors returned by [`Order::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum OrderValidationError {
    EmptyField {
        field: &'static str,
    },
    NegativeValue {
        field: &'static str,
        value: i32,
    },
    /// Discount and redeemed points together exceed the list price.
    DeductionsExceedPrice {
        price: i32,
        deductions: i32,
    },
    /// Discount and redeemed points do not fit in an amount.
    DeductionsOverflow {
        discount: i32,
        points_applied: i32,
    },
    /// A supplied final price disagrees with the pricing rule.
    FinalPriceMismatch {
        expected: i32,
        actual: i32,
    },
    InvalidTechnicianRating {
        rating: f32,
    },
}

impl fmt::Display for OrderValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::NegativeValue { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            Self::DeductionsExceedPrice { price, deductions } => write!(
                f,
                "discount and points ({deductions}) must not exceed the price ({price})"
            ),
            Self::DeductionsOverflow {
                discount,
                points_applied,
            } => write!(
                f,
                "discount ({discount}) plus {points_applied} points overflows the order amount"
            ),
            Self::FinalPriceMismatch { expected, actual } => {
                write!(f, "final price should be {expected} (got {actual})")
            }
            Self::InvalidTechnicianRating { rating } => {
                write!(f, "technician rating must be between 0.0 and 5.0 (got {rating})")
            }
        }
    }
}

impl std::error::Error for OrderValidationError {}
