//! Inbox screen.

use std::sync::Arc;

use mockable::Clock;
use tracing::debug;

use crate::domain::{
    Message, MessageKind, mark_all_read, recent, relative_date_label, unread_badge, unread_count,
};
use crate::listing::{CategoryCounts, TabFilter, TabbedView};
use crate::selection::DetailSelection;

pub struct MessagesScreen {
    messages: Vec<Message>,
    tabs: TabbedView<MessageKind>,
    details: DetailSelection<String>,
    clock: Arc<dyn Clock>,
}

impl MessagesScreen {
    /// Opens the inbox on the `all` tab.
    pub fn new(messages: Vec<Message>, clock: Arc<dyn Clock>) -> Self {
        Self {
            messages,
            tabs: TabbedView::default(),
            details: DetailSelection::default(),
            clock,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.messages.as_slice()
    }

    pub fn active_tab(&self) -> TabFilter<MessageKind> {
        self.tabs.active()
    }

    /// Switches tabs without touching read state.
    pub fn select_tab(&mut self, tab: TabFilter<MessageKind>) {
        self.tabs.select(tab);
    }

    /// Messages in the active tab, in inbox order.
    pub fn visible(&self) -> Vec<&Message> {
        self.tabs.view(&self.messages)
    }

    /// Badge counts over the whole inbox.
    pub fn counts(&self) -> CategoryCounts<MessageKind> {
        self.tabs.counts(&self.messages)
    }

    pub fn unread_count(&self) -> usize {
        unread_count(&self.messages)
    }

    /// Badge text for the unread count, or `None` when all are read.
    pub fn unread_badge(&self) -> Option<String> {
        unread_badge(self.unread_count())
    }

    /// Marks one message read. Returns `false` for unknown ids.
    pub fn mark_read(&mut self, id: &str) -> bool {
        let Some(message) = self.messages.iter_mut().find(|message| message.id() == id) else {
            return false;
        };
        if !message.is_read() {
            *message = message.mark_read();
            debug!(message_id = id, "message marked read");
        }
        true
    }

    /// Marks every message read, whatever tab is active.
    pub fn mark_all_read(&mut self) {
        self.messages = mark_all_read(&self.messages);
        debug!("all messages marked read");
    }

    /// Opens a message, marking it read.
    pub fn open(&mut self, id: &str) -> bool {
        if !self.mark_read(id) {
            return false;
        }
        self.details.open(id.to_owned());
        true
    }

    /// Closes the open message.
    pub fn close(&mut self) {
        self.details.close();
    }

    pub fn selected(&self) -> Option<&Message> {
        let id = self.details.selected()?;
        self.messages.iter().find(|message| message.id() == id)
    }

    /// The newest `limit` messages.
    pub fn recent(&self, limit: usize) -> Vec<&Message> {
        recent(&self.messages, limit)
    }

    /// `Today`, `Yesterday` or a short date, relative to the clock.
    pub fn date_label(&self, message: &Message) -> String {
        relative_date_label(message.date(), self.clock.local().date_naive())
    }
}
