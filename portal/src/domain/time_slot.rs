//! Appointment time slots.
//!
//! Slots are wall-clock times rendered in the `h:MM AM` form used across the
//! portal. Booking and rescheduling each offer a fixed enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: u16 = 60;
const HOURS_PER_DAY: u16 = 24;
const MINUTES_PER_DAY: u16 = HOURS_PER_DAY * MINUTES_PER_HOUR;

/// A time of day at minute precision.
///
/// # Examples
///
/// ```
/// use portal::domain::TimeSlot;
///
/// let slot: TimeSlot = "2:30 PM".parse().expect("valid slot");
/// assert_eq!(slot, TimeSlot::at(14, 30));
/// assert_eq!(slot.to_string(), "2:30 PM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    minutes: u16,
}

/// Hourly slots offered by the booking wizard. There is no midday slot.
pub const BOOKING_SLOTS: [TimeSlot; 9] = [
    TimeSlot::at(8, 0),
    TimeSlot::at(9, 0),
    TimeSlot::at(10, 0),
    TimeSlot::at(11, 0),
    TimeSlot::at(13, 0),
    TimeSlot::at(14, 0),
    TimeSlot::at(15, 0),
    TimeSlot::at(16, 0),
    TimeSlot::at(17, 0),
];

/// Half-hour slots offered when rescheduling, 8:00 AM through 6:00 PM.
pub const RESCHEDULE_SLOTS: [TimeSlot; 21] = [
    TimeSlot::at(8, 0),
    TimeSlot::at(8, 30),
    TimeSlot::at(9, 0),
    TimeSlot::at(9, 30),
    TimeSlot::at(10, 0),
    TimeSlot::at(10, 30),
    TimeSlot::at(11, 0),
    TimeSlot::at(11, 30),
    TimeSlot::at(12, 0),
    TimeSlot::at(12, 30),
    TimeSlot::at(13, 0),
    TimeSlot::at(13, 30),
    TimeSlot::at(14, 0),
    TimeSlot::at(14, 30),
    TimeSlot::at(15, 0),
    TimeSlot::at(15, 30),
    TimeSlot::at(16, 0),
    TimeSlot::at(16, 30),
    TimeSlot::at(17, 0),
    TimeSlot::at(17, 30),
    TimeSlot::at(18, 0),
];

impl TimeSlot {
    /// Builds a slot from a 24-hour clock reading.
    ///
    /// Out-of-range readings wrap around midnight.
    #[must_use]
    pub const fn at(hour: u16, minute: u16) -> Self {
        Self {
            minutes: ((hour % HOURS_PER_DAY) * MINUTES_PER_HOUR + minute % MINUTES_PER_DAY)
                % MINUTES_PER_DAY,
        }
    }

    /// Hour on the 24-hour clock.
    #[must_use]
    pub const fn hour(self) -> u16 {
        self.minutes / MINUTES_PER_HOUR
    }

    #[must_use]
    pub const fn minute(self) -> u16 {
        self.minutes % MINUTES_PER_HOUR
    }

    /// Whether the slot is offered by the booking wizard.
    #[must_use]
    pub fn is_bookable(self) -> bool {
        BOOKING_SLOTS.contains(&self)
    }

    /// Whether the slot is offered when rescheduling.
    #[must_use]
    pub fn is_reschedulable(self) -> bool {
        RESCHEDULE_SLOTS.contains(&self)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.hour();
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        let display_hour = match hour % 12 {
            0 => 12,
            other => other,
        };
        write!(f, "{display_hour}:{:02} {meridiem}", self.minute())
    }
}

/// Error returned when a time string is not in `h:MM AM` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeSlotError {
    /// The unrecognised input value.
    pub input: String,
}

impl fmt::Display for ParseTimeSlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time of day (expected h:MM AM): {}", self.input)
    }
}

impl std::error::Error for ParseTimeSlotError {}

impl FromStr for TimeSlot {
    type Err = ParseTimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeSlotError {
            input: s.to_owned(),
        };
        let (clock, meridiem) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
        if minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u16 = hour.parse().map_err(|_| invalid())?;
        let minute: u16 = minute.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&hour) || minute >= MINUTES_PER_HOUR {
            return Err(invalid());
        }
        let hour = match (meridiem, hour) {
            ("AM", 12) => 0,
            ("AM", h) => h,
            ("PM", 12) => 12,
            ("PM", h) => h + 12,
            _ => return Err(invalid()),
        };
        Ok(Self::at(hour, minute))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ParseTimeSlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(value: TimeSlot) -> Self {
        value.to_string()
    }
}
