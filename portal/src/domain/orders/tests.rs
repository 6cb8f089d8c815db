//! Unit tests for orders and pricing.

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::rating::StarRating;
use crate::domain::time_slot::TimeSlot;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date")
}

#[fixture]
fn draft() -> OrderDraft {
    OrderDraft {
        id: "ORD-002".to_owned(),
        service: "Chemical Balance".to_owned(),
        company: "AquaPro Services".to_owned(),
        pool: "Main Pool".to_owned(),
        date: date(12),
        time: TimeSlot::at(10, 0),
        technician: Technician {
            name: "Sarah Wilson".to_owned(),
            phone: "(555) 987-6543".to_owned(),
            rating: 4.9,
        },
        status: OrderStatus::Completed,
        price: 45,
        discount: 5,
        points_applied: 200,
        final_price: Some(30),
        notes: String::new(),
        timeline: vec![TimelineEntry {
            date: date(12),
            time: TimeSlot::at(10, 45),
            status: "Service completed".to_owned(),
            completed: true,
        }],
        photos: vec![],
        rating: None,
    }
}

#[rstest]
#[case::no_deductions(OrderStatus::Upcoming, 85, 0, 0, 85)]
#[case::discount_and_points(OrderStatus::Completed, 45, 5, 200, 30)]
#[case::larger_redemption(OrderStatus::Upcoming, 150, 15, 300, 120)]
#[case::points_round_down(OrderStatus::Completed, 100, 0, 59, 98)]
#[case::cancelled_charges_nothing(OrderStatus::Cancelled, 120, 0, 0, 0)]
#[case::cancelled_ignores_deductions(OrderStatus::Cancelled, 150, 15, 300, 0)]
fn final_price_follows_pricing_rule(
    #[case] status: OrderStatus,
    #[case] price: i32,
    #[case] discount: i32,
    #[case] points: i32,
    #[case] expected: i32,
) {
    assert_eq!(final_price(status, price, discount, points), expected);
}

#[rstest]
fn order_accepts_consistent_final_price(draft: OrderDraft) {
    let order = Order::new(draft).expect("valid order");
    assert_eq!(order.final_price(), 30);
    assert_eq!(order.status(), OrderStatus::Completed);
}

#[rstest]
fn order_computes_final_price_when_absent(mut draft: OrderDraft) {
    draft.final_price = None;
    let order = Order::new(draft).expect("valid order");
    assert_eq!(order.final_price(), 30);
}

#[rstest]
fn order_rejects_inconsistent_final_price(mut draft: OrderDraft) {
    draft.final_price = Some(35);
    assert_eq!(
        Order::new(draft),
        Err(OrderValidationError::FinalPriceMismatch {
            expected: 30,
            actual: 35,
        })
    );
}

#[rstest]
fn order_rejects_deductions_above_price(mut draft: OrderDraft) {
    draft.discount = 40;
    draft.final_price = None;
    assert_eq!(
        Order::new(draft),
        Err(OrderValidationError::DeductionsExceedPrice {
            price: 45,
            deductions: 50,
        })
    );
}

#[rstest]
fn order_rejects_deductions_that_overflow(mut draft: OrderDraft) {
    draft.discount = i32::MAX;
    draft.final_price = None;
    let err = Order::new(draft).expect_err("overflowing deductions");
    assert_eq!(
        err,
        OrderValidationError::DeductionsOverflow {
            discount: i32::MAX,
            points_applied: 200,
        }
    );
    assert!(err.to_string().contains("overflows"));
}

#[rstest]
fn order_rejects_negative_points(mut draft: OrderDraft) {
    draft.points_applied = -20;
    assert_eq!(
        Order::new(draft),
        Err(OrderValidationError::NegativeValue {
            field: "order.points_applied",
            value: -20,
        })
    );
}

#[rstest]
fn order_rejects_out_of_range_technician_rating(mut draft: OrderDraft) {
    draft.technician.rating = 5.5;
    assert_eq!(
        Order::new(draft),
        Err(OrderValidationError::InvalidTechnicianRating { rating: 5.5 })
    );
}

#[rstest]
#[case(OrderStatus::Upcoming, None, false, true)]
#[case(OrderStatus::Completed, None, true, false)]
#[case(OrderStatus::Completed, Some(4), false, false)]
#[case(OrderStatus::Cancelled, None, false, false)]
fn available_actions_follow_status(
    mut draft: OrderDraft,
    #[case] status: OrderStatus,
    #[case] stars: Option<u8>,
    #[case] can_rate: bool,
    #[case] can_reschedule: bool,
) {
    draft.status = status;
    draft.final_price = None;
    draft.rating = stars.map(|value| StarRating::new(value).expect("valid rating"));
    let order = Order::new(draft).expect("valid order");

    assert_eq!(order.can_rate(), can_rate);
    assert_eq!(order.can_reschedule(), can_reschedule);
}

#[rstest]
fn transitions_return_new_values(draft: OrderDraft) {
    let order = Order::new(draft).expect("valid order");
    let stars = StarRating::new(4).expect("valid rating");

    let rated = order.with_rating(stars);
    let moved = order.rescheduled(date(20), TimeSlot::at(15, 30));

    assert_eq!(rated.rating(), Some(stars));
    assert_eq!(order.rating(), None);
    assert_eq!((moved.date(), moved.time()), (date(20), TimeSlot::at(15, 30)));
    assert_eq!((order.date(), order.time()), (date(12), TimeSlot::at(10, 0)));
    assert_eq!(moved.id(), order.id());
}

#[rstest]
#[case("upcoming", OrderStatus::Upcoming)]
#[case("completed", OrderStatus::Completed)]
#[case("cancelled", OrderStatus::Cancelled)]
fn status_parses_and_prints(#[case] input: &str, #[case] expected: OrderStatus) {
    let parsed: OrderStatus = input.parse().expect("known status");
    assert_eq!(parsed, expected);
    assert_eq!(parsed.to_string(), input);
}

#[rstest]
fn status_rejects_unknown_input() {
    assert!("pending".parse::<OrderStatus>().is_err());
}
