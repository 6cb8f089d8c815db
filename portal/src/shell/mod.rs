//! Navigation shell: active section, back navigation and the account menu.
//!
//! The shell owns the menu's open flag. Every navigation closes the menu
//! through the same dispatch path, so no screen has to remember to do it.

mod deferred;
mod section;

#[cfg(test)]
mod tests;

use tracing::debug;

pub use deferred::{PendingNavigation, navigate_after};
pub use section::{ParseSectionError, Section};

/// Items in the account dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Account,
    Shipping,
    Payment,
    Logout,
}

impl MenuItem {
    pub const ALL: [Self; 4] = [Self::Account, Self::Shipping, Self::Payment, Self::Logout];

    /// Section the item opens. Logout opens nothing.
    pub const fn section(self) -> Option<Section> {
        match self {
            Self::Account => Some(Section::Account),
            Self::Shipping => Some(Section::Shipping),
            Self::Payment => Some(Section::Payment),
            Self::Logout => None,
        }
    }
}

/// Keys the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Other(char),
}

/// Requests screens and chrome make of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Navigate(Section),
    GoBack,
    ToggleMenu,
    Menu(MenuItem),
    KeyPressed(Key),
}

/// What a dispatched action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOutcome {
    Navigated { from: Section, to: Section },
    MenuToggled { open: bool },
    MenuClosed,
    LoggedOut,
    /// The action had no effect.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationShell {
    active: Section,
    previous: Option<Section>,
    menu_open: bool,
}

impl Default for NavigationShell {
    fn default() -> Self {
        Self::new(Section::Dashboard)
    }
}

impl NavigationShell {
    /// Starts on `start` with no history and the menu closed.
    pub fn new(start: Section) -> Self {
        Self {
            active: start,
            previous: None,
            menu_open: false,
        }
    }

    /// The section on screen.
    pub fn active(&self) -> Section {
        self.active
    }

    /// The section `go_back` returns to.
    pub fn previous(&self) -> Option<Section> {
        self.previous
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Switches to `section`, remembering the current one.
    pub fn navigate_to(&mut self, section: Section) -> ShellOutcome {
        self.dispatch(ShellAction::Navigate(section))
    }

    /// Returns to the recorded previous section. The record itself is kept,
    /// so repeated calls settle on that section instead of toggling.
    pub fn go_back(&mut self) -> ShellOutcome {
        self.dispatch(ShellAction::GoBack)
    }

    /// Applies one user action and reports what changed.
    ///
    /// Any navigation closes the account menu. Escape closes an open menu and
    /// is ignored otherwise.
    pub fn dispatch(&mut self, action: ShellAction) -> ShellOutcome {
        let outcome = match action {
            ShellAction::Navigate(section) => self.switch_to(section),
            ShellAction::GoBack => match self.previous {
                Some(previous) => self.return_to(previous),
                None => ShellOutcome::Ignored,
            },
            ShellAction::ToggleMenu => {
                self.menu_open = !self.menu_open;
                ShellOutcome::MenuToggled {
                    open: self.menu_open,
                }
            }
            ShellAction::Menu(item) => match item.section() {
                Some(section) => self.switch_to(section),
                None => {
                    self.menu_open = false;
                    ShellOutcome::LoggedOut
                }
            },
            ShellAction::KeyPressed(Key::Escape) if self.menu_open => {
                self.menu_open = false;
                ShellOutcome::MenuClosed
            }
            ShellAction::KeyPressed(_) => ShellOutcome::Ignored,
        };
        debug!(?action, ?outcome, active = %self.active, "shell action dispatched");
        outcome
    }

    fn switch_to(&mut self, section: Section) -> ShellOutcome {
        let from = self.active;
        self.previous = Some(from);
        self.active = section;
        self.menu_open = false;
        ShellOutcome::Navigated { from, to: section }
    }

    fn return_to(&mut self, section: Section) -> ShellOutcome {
        let from = self.active;
        self.active = section;
        self.menu_open = false;
        ShellOutcome::Navigated { from, to: section }
    }
}
