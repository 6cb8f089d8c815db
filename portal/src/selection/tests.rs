//! Unit tests for detail selection and the rating and reschedule flows.

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::{
    Order, OrderDraft, OrderStatus, RatingValueError, StarRating, Technician, TimeSlot,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date")
}

fn order(id: &str, status: OrderStatus) -> Order {
    Order::new(OrderDraft {
        id: id.to_owned(),
        service: "Deep Pool Cleaning".to_owned(),
        company: "Crystal Clear Pools".to_owned(),
        pool: "Main Pool".to_owned(),
        date: date(20),
        time: TimeSlot::at(9, 0),
        technician: Technician {
            name: "Alex Rodriguez".to_owned(),
            phone: "(555) 456-7890".to_owned(),
            rating: 4.9,
        },
        status,
        price: 150,
        discount: 15,
        points_applied: 300,
        final_price: None,
        notes: String::new(),
        timeline: vec![],
        photos: vec![],
        rating: None,
    })
    .expect("valid order")
}

#[fixture]
fn completed() -> Order {
    order("ORD-002", OrderStatus::Completed)
}

#[fixture]
fn upcoming() -> Order {
    order("ORD-004", OrderStatus::Upcoming)
}

#[rstest]
fn opening_replaces_rather_than_stacks() {
    let mut selection = DetailSelection::default();
    selection.open("ORD-001".to_owned());
    selection.open("ORD-002".to_owned());

    assert_eq!(selection.selected().map(String::as_str), Some("ORD-002"));
    assert!(!selection.is_showing(&"ORD-001".to_owned()));

    selection.close();
    assert!(!selection.is_open());
}

#[rstest]
fn rating_submission_needs_stars(mut completed: Order) {
    let mut flow = RatingFlow::default();
    flow.open(completed.id());
    assert!(!flow.can_submit());
    assert_eq!(flow.submit(&completed), Err(RatingError::RatingRequired));

    flow.set_stars(4).expect("valid stars");
    flow.set_comment("Spotless");
    assert!(flow.can_submit());
    assert_eq!(flow.label(), Some("Very Good"));

    completed = flow.submit(&completed).expect("submitted");
    assert_eq!(completed.rating(), StarRating::new(4).ok());
    assert!(!flow.is_open());
    assert!(flow.comment().is_empty());
}

#[rstest]
#[case(0)]
#[case(6)]
fn rating_rejects_out_of_range_stars(#[case] stars: u8) {
    let mut flow = RatingFlow::default();
    flow.open("ORD-002");
    assert_eq!(
        flow.set_stars(stars),
        Err(RatingError::InvalidRating(RatingValueError { value: stars }))
    );
    assert_eq!(flow.stars(), None);
}

#[rstest]
fn closed_rating_flow_refuses_submission(completed: Order) {
    let mut flow = RatingFlow::default();
    assert_eq!(flow.submit(&completed), Err(RatingError::NotOpen));
}

#[rstest]
fn rating_refuses_a_different_order(completed: Order) {
    let mut flow = RatingFlow::default();
    flow.open("ORD-005");
    flow.set_stars(5).expect("valid stars");
    assert_eq!(
        flow.submit(&completed),
        Err(RatingError::OrderMismatch {
            expected: "ORD-005".to_owned(),
            actual: "ORD-002".to_owned(),
        })
    );
    assert!(flow.is_open());
}

#[rstest]
fn reopening_rating_discards_previous_values() {
    let mut flow = RatingFlow::default();
    flow.open("ORD-002");
    flow.set_stars(2).expect("valid stars");
    flow.open("ORD-005");
    assert_eq!(flow.stars(), None);
    assert_eq!(flow.order_id(), Some("ORD-005"));
}

#[rstest]
#[case::nothing_chosen(None, None, false)]
#[case::date_only(Some(18), None, false)]
#[case::time_only(None, Some(TimeSlot::at(8, 30)), false)]
#[case::past_date(Some(14), Some(TimeSlot::at(8, 30)), false)]
#[case::today(Some(15), Some(TimeSlot::at(8, 30)), true)]
#[case::future(Some(22), Some(TimeSlot::at(17, 30)), true)]
fn reschedule_confirm_requires_date_and_time(
    #[case] day: Option<u32>,
    #[case] time: Option<TimeSlot>,
    #[case] enabled: bool,
) {
    let mut flow = RescheduleFlow::default();
    flow.open("ORD-004");
    if let Some(day) = day {
        flow.choose_date(date(day));
    }
    if let Some(time) = time {
        flow.pick_time(time).expect("offered slot");
    }
    assert_eq!(flow.can_submit(date(15)), enabled);
}

#[rstest]
fn reschedule_moves_the_order(upcoming: Order) {
    let mut flow = RescheduleFlow::default();
    flow.open(upcoming.id());
    flow.choose_date(date(22));
    flow.pick_time(TimeSlot::at(15, 30)).expect("offered slot");

    let moved = flow.submit(&upcoming, date(15)).expect("rescheduled");

    assert_eq!((moved.date(), moved.time()), (date(22), TimeSlot::at(15, 30)));
    assert_eq!(upcoming.date(), date(20));
    assert!(!flow.is_open());
}

#[rstest]
fn reschedule_reports_past_dates(upcoming: Order) {
    let mut flow = RescheduleFlow::default();
    flow.open(upcoming.id());
    flow.choose_date(date(10));
    flow.pick_time(TimeSlot::at(9, 0)).expect("offered slot");

    assert_eq!(
        flow.submit(&upcoming, date(15)),
        Err(RescheduleError::DateInPast {
            date: date(10),
            today: date(15),
        })
    );
    assert!(flow.is_open());
}

#[rstest]
fn reschedule_rejects_unoffered_times() {
    let mut flow = RescheduleFlow::default();
    flow.open("ORD-004");
    assert_eq!(
        flow.pick_time(TimeSlot::at(7, 30)),
        Err(RescheduleError::UnofferedTime {
            time: TimeSlot::at(7, 30)
        })
    );
    assert_eq!(flow.time_slots().len(), 21);
}
