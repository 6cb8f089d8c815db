//! Behavioural tests for the inbox screen.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::{Arc, Mutex};

use portal::domain::MessageKind;
use portal::listing::TabFilter;
use portal::screens::MessagesScreen;
use portal::test_support::{FixedClock, sample_catalogue, sample_today};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

#[derive(Default, ScenarioState)]
struct World {
    screen: Slot<Arc<Mutex<MessagesScreen>>>,
}

impl World {
    fn with_screen<R>(&self, f: impl FnOnce(&mut MessagesScreen) -> R) -> R {
        let screen = self.screen.get().expect("inbox should be set");
        let mut guard = screen.lock().expect("inbox lock");
        f(&mut guard)
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("the inbox")]
fn the_inbox(world: &World) {
    let screen = MessagesScreen::new(
        sample_catalogue().messages,
        Arc::new(FixedClock::on(sample_today())),
    );
    world.screen.set(Arc::new(Mutex::new(screen)));
}

#[when("the customer opens message {id}")]
fn the_customer_opens_message(world: &World, id: String) {
    assert!(world.with_screen(|screen| screen.open(&id)), "unknown message {id}");
}

#[when("the customer selects the \"{tab}\" tab")]
fn the_customer_selects_the_tab(world: &World, tab: String) {
    let tab: TabFilter<MessageKind> = tab.parse().expect("known tab");
    world.with_screen(|screen| screen.select_tab(tab));
}

#[when("the customer marks every message read")]
fn the_customer_marks_every_message_read(world: &World) {
    world.with_screen(MessagesScreen::mark_all_read);
}

#[then("{count:usize} messages are unread")]
fn messages_are_unread(world: &World, count: usize) {
    assert_eq!(world.with_screen(|screen| screen.unread_count()), count);
}

#[then("{count:usize} messages are visible")]
fn messages_are_visible(world: &World, count: usize) {
    assert_eq!(world.with_screen(|screen| screen.visible().len()), count);
}

#[then("every visible message is a \"{kind}\"")]
fn every_visible_message_is_a(world: &World, kind: String) {
    let kind: MessageKind = kind.parse().expect("known message type");
    let kinds: Vec<MessageKind> = world.with_screen(|screen| {
        screen.visible().into_iter().map(|message| message.kind()).collect()
    });
    assert!(kinds.iter().all(|k| *k == kind), "{kinds:?}");
}

#[then("message {id} is showing")]
fn message_is_showing(world: &World, id: String) {
    let selected = world.with_screen(|screen| screen.selected().map(|m| m.id().to_owned()));
    assert_eq!(selected, Some(id));
}

#[then("the unread badge is hidden")]
fn the_unread_badge_is_hidden(world: &World) {
    assert_eq!(world.with_screen(|screen| screen.unread_badge()), None);
}

#[scenario(
    path = "tests/features/inbox.feature",
    name = "Opening an unread message decrements the unread count once"
)]
fn opening_an_unread_message_decrements_once(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/inbox.feature",
    name = "The promotion tab shows only promotions"
)]
fn the_promotion_tab_shows_only_promotions(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/inbox.feature",
    name = "Marking everything read hides the badge"
)]
fn marking_everything_read_hides_the_badge(world: World) {
    let _ = world;
}
