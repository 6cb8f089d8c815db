//! Inbox messages.
//!
//! Messages are immutable; reading one yields a new value with the read flag
//! set. Helpers here derive the unread count, the unread badge label and the
//! recent-message preview used by the dashboard.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::time_slot::TimeSlot;

/// Category of an inbox message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    System,
    Promotion,
}

impl MessageKind {
    pub const ALL: [Self; 2] = [Self::System, Self::Promotion];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Promotion => "promotion",
        }
    }

    /// Inbox tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::System => "System Updates",
            Self::Promotion => "Promotions",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = MessageValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            "promotion" => Ok(Self::Promotion),
            _ => Err(MessageValidationError::UnknownKind {
                input: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
}

impl FromStr for Priority {
    type Err = MessageValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            _ => Err(MessageValidationError::UnknownPriority {
                input: s.to_owned(),
            }),
        }
    }
}

/// Validation errors raised while building messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageValidationError {
    EmptyField { field: &'static str },
    UnknownKind { input: String },
    UnknownPriority { input: String },
}

impl fmt::Display for MessageValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::UnknownKind { input } => write!(f, "unknown message type: {input}"),
            Self::UnknownPriority { input } => write!(f, "unknown message priority: {input}"),
        }
    }
}

impl std::error::Error for MessageValidationError {}

/// Input payload for [`Message::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub id: String,
    pub kind: MessageKind,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub read: bool,
    pub priority: Priority,
}

/// A message in the customer's inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: String,
    #[serde(rename = "type")]
    kind: MessageKind,
    title: String,
    description: String,
    date: NaiveDate,
    time: TimeSlot,
    read: bool,
    priority: Priority,
}

impl Message {
    /// Validates a draft into a message.
    pub fn new(draft: MessageDraft) -> Result<Self, MessageValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }
    pub fn kind(&self) -> MessageKind {
        self.kind
    }
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn time(&self) -> TimeSlot {
        self.time
    }
    /// Unread messages count towards the inbox badge.
    pub fn is_read(&self) -> bool {
        self.read
    }
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the message with its read flag set.
    ///
    /// Reading an already-read message returns an identical value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use portal::domain::{Message, MessageDraft, MessageKind, Priority, TimeSlot};
    ///
    /// let message = Message::new(MessageDraft {
    ///     id: "msg-001".to_owned(),
    ///     kind: MessageKind::System,
    ///     title: "Service Completed".to_owned(),
    ///     description: String::new(),
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
    ///     time: TimeSlot::at(15, 30),
    ///     read: false,
    ///     priority: Priority::Normal,
    /// })
    /// .expect("valid message");
    ///
    /// let read = message.mark_read();
    /// assert!(read.is_read());
    /// assert_eq!(read.mark_read(), read);
    /// ```
    #[must_use]
    pub fn mark_read(&self) -> Self {
        Self {
            read: true,
            ..self.clone()
        }
    }
}

impl TryFrom<MessageDraft> for Message {
    type Error = MessageValidationError;

    fn try_from(draft: MessageDraft) -> Result<Self, Self::Error> {
        if draft.id.trim().is_empty() {
            return Err(MessageValidationError::EmptyField { field: "message.id" });
        }
        if draft.title.trim().is_empty() {
            return Err(MessageValidationError::EmptyField {
                field: "message.title",
            });
        }
        Ok(Self {
            id: draft.id,
            kind: draft.kind,
            title: draft.title,
            description: draft.description,
            date: draft.date,
            time: draft.time,
            read: draft.read,
            priority: draft.priority,
        })
    }
}

/// Number of messages not yet read.
pub fn unread_count(messages: &[Message]) -> usize {
    messages.iter().filter(|message| !message.is_read()).count()
}

/// Returns every message marked read.
pub fn mark_all_read(messages: &[Message]) -> Vec<Message> {
    messages.iter().map(Message::mark_read).collect()
}

/// Label for the unread badge, hidden when nothing is unread.
///
/// # Examples
///
/// ```
/// use portal::domain::unread_badge;
///
/// assert_eq!(unread_badge(0), None);
/// assert_eq!(unread_badge(3).as_deref(), Some("3"));
/// assert_eq!(unread_badge(12).as_deref(), Some("9+"));
/// ```
pub fn unread_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_owned()),
    }
}

/// The `limit` most recent messages, newest first.
pub fn recent(messages: &[Message], limit: usize) -> Vec<&Message> {
    let mut ordered: Vec<&Message> = messages.iter().collect();
    ordered.sort_by_key(|message| Reverse((message.date(), message.time())));
    ordered.truncate(limit);
    ordered
}

/// Human date label relative to `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use portal::domain::relative_date_label;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
/// let earlier = NaiveDate::from_ymd_opt(2024, 1, 3).expect("valid date");
/// assert_eq!(relative_date_label(today, today), "Today");
/// assert_eq!(relative_date_label(earlier, today), "Jan 3");
/// ```
pub fn relative_date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_owned();
    }
    if today.checked_sub_days(Days::new(1)) == Some(date) {
        return "Yesterday".to_owned();
    }
    date.format("%b %-d").to_string()
}
