//! Order pricing rules.

use super::OrderStatus;

/// Reward points that buy one whole currency unit.
pub const POINTS_PER_CURRENCY_UNIT: i32 = 20;

/// Currency value of redeemed points, rounded down.
///
/// # Examples
///
/// ```
/// use portal::domain::points_value;
///
/// assert_eq!(points_value(200), 10);
/// assert_eq!(points_value(39), 1);
/// ```
pub const fn points_value(points: i32) -> i32 {
    points.div_euclid(POINTS_PER_CURRENCY_UNIT)
}

/// Amount charged for an order.
///
/// Cancelled orders charge nothing. Otherwise the charge is the list price
/// less the discount and the value of the redeemed points.
///
/// # Examples
///
/// ```
/// use portal::domain::{OrderStatus, final_price};
///
/// assert_eq!(final_price(OrderStatus::Completed, 45, 5, 200), 30);
/// assert_eq!(final_price(OrderStatus::Cancelled, 120, 0, 0), 0);
/// ```
pub const fn final_price(status: OrderStatus, price: i32, discount: i32, points: i32) -> i32 {
    match status {
        OrderStatus::Cancelled => 0,
        OrderStatus::Upcoming | OrderStatus::Completed => price - discount - points_value(points),
    }
}
