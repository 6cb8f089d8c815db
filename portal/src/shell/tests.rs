//! Unit tests for the navigation shell.

use std::sync::Arc;
use std::time::Duration;

use rstest::{fixture, rstest};
use tokio::sync::Mutex;

use super::*;

#[fixture]
fn shell() -> NavigationShell {
    NavigationShell::default()
}

#[rstest]
fn starts_on_dashboard_with_menu_closed(shell: NavigationShell) {
    assert_eq!(shell.active(), Section::Dashboard);
    assert_eq!(shell.previous(), None);
    assert!(!shell.is_menu_open());
}

#[rstest]
fn navigation_records_the_previous_section(mut shell: NavigationShell) {
    assert_eq!(
        shell.navigate_to(Section::Orders),
        ShellOutcome::Navigated {
            from: Section::Dashboard,
            to: Section::Orders
        }
    );
    shell.navigate_to(Section::Messages);

    assert_eq!(shell.active(), Section::Messages);
    assert_eq!(shell.previous(), Some(Section::Orders));
}

#[rstest]
fn go_back_restores_the_previous_section(mut shell: NavigationShell) {
    shell.navigate_to(Section::Pools);
    shell.navigate_to(Section::Messages);

    shell.go_back();
    assert_eq!(shell.active(), Section::Pools);
    assert_eq!(shell.previous(), Some(Section::Pools));
}

#[rstest]
fn repeated_go_back_stays_on_the_previous_section(mut shell: NavigationShell) {
    shell.navigate_to(Section::Pools);
    shell.navigate_to(Section::Messages);

    assert_eq!(
        shell.go_back(),
        ShellOutcome::Navigated {
            from: Section::Messages,
            to: Section::Pools
        }
    );
    assert_eq!(
        shell.go_back(),
        ShellOutcome::Navigated {
            from: Section::Pools,
            to: Section::Pools
        }
    );
    assert_eq!(shell.active(), Section::Pools);
    assert_eq!(shell.previous(), Some(Section::Pools));
}

#[rstest]
fn go_back_without_history_is_ignored(mut shell: NavigationShell) {
    assert_eq!(shell.go_back(), ShellOutcome::Ignored);
    assert_eq!(shell.active(), Section::Dashboard);
}

#[rstest]
#[case::navigate(ShellAction::Navigate(Section::Services))]
#[case::account(ShellAction::Menu(MenuItem::Account))]
#[case::shipping(ShellAction::Menu(MenuItem::Shipping))]
#[case::payment(ShellAction::Menu(MenuItem::Payment))]
#[case::logout(ShellAction::Menu(MenuItem::Logout))]
#[case::escape(ShellAction::KeyPressed(Key::Escape))]
fn menu_closing_actions(mut shell: NavigationShell, #[case] action: ShellAction) {
    shell.dispatch(ShellAction::ToggleMenu);
    assert!(shell.is_menu_open());

    shell.dispatch(action);
    assert!(!shell.is_menu_open());
}

#[rstest]
fn logout_only_closes_the_menu(mut shell: NavigationShell) {
    shell.navigate_to(Section::Orders);
    shell.dispatch(ShellAction::ToggleMenu);

    assert_eq!(
        shell.dispatch(ShellAction::Menu(MenuItem::Logout)),
        ShellOutcome::LoggedOut
    );
    assert_eq!(shell.active(), Section::Orders);
}

#[rstest]
fn menu_items_open_their_sections(mut shell: NavigationShell) {
    shell.dispatch(ShellAction::Menu(MenuItem::Payment));
    assert_eq!(shell.active(), Section::Payment);
}

#[rstest]
#[case::escape_with_menu_closed(false, Key::Escape)]
#[case::other_key_with_menu_open(true, Key::Other('q'))]
fn other_keys_do_nothing(mut shell: NavigationShell, #[case] menu_open: bool, #[case] key: Key) {
    if menu_open {
        shell.dispatch(ShellAction::ToggleMenu);
    }
    let before = shell.clone();

    assert_eq!(shell.dispatch(ShellAction::KeyPressed(key)), ShellOutcome::Ignored);
    assert_eq!(shell, before);
}

#[rstest]
fn sections_parse_from_names() {
    for section in Section::ALL {
        assert_eq!(section.as_str().parse::<Section>(), Ok(section));
    }
    assert!("settings".parse::<Section>().is_err());
}

#[tokio::test(start_paused = true)]
async fn deferred_navigation_applies_after_delay() {
    let shell = Arc::new(Mutex::new(NavigationShell::new(Section::Pools)));
    let pending = navigate_after(Arc::clone(&shell), Section::Services, Duration::from_millis(200));

    tokio::time::sleep(Duration::from_millis(199)).await;
    assert_eq!(shell.lock().await.active(), Section::Pools);

    let outcome = pending.completed().await;
    assert_eq!(
        outcome,
        Some(ShellOutcome::Navigated {
            from: Section::Pools,
            to: Section::Services
        })
    );
    assert_eq!(shell.lock().await.active(), Section::Services);
}

#[tokio::test(start_paused = true)]
async fn dropping_pending_navigation_discards_it() {
    let shell = Arc::new(Mutex::new(NavigationShell::new(Section::Pools)));
    let pending = navigate_after(Arc::clone(&shell), Section::Services, Duration::from_millis(200));
    assert_eq!(pending.target(), Section::Services);

    drop(pending);
    tokio::time::sleep(Duration::from_secs(1)).await;

    let shell = shell.lock().await;
    assert_eq!(shell.active(), Section::Pools);
    assert_eq!(shell.previous(), None);
}

#[tokio::test(start_paused = true)]
async fn cancelled_wait_discards_pending_navigation() {
    let shell = Arc::new(Mutex::new(NavigationShell::new(Section::Pools)));
    let pending = navigate_after(Arc::clone(&shell), Section::Services, Duration::from_millis(200));

    let waited = tokio::time::timeout(Duration::from_millis(50), pending.completed()).await;
    assert!(waited.is_err());

    tokio::time::sleep(Duration::from_secs(1)).await;
    let shell = shell.lock().await;
    assert_eq!(shell.active(), Section::Pools);
    assert_eq!(shell.previous(), None);
}
