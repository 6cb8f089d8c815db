//! One-to-five star ratings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A star rating between one and five.
///
/// # Examples
///
/// ```
/// use portal::domain::StarRating;
///
/// let rating = StarRating::new(4).expect("in range");
/// assert_eq!(rating.label(), "Very Good");
/// assert!(StarRating::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validates a raw star count.
    pub const fn new(stars: u8) -> Result<Self, RatingValueError> {
        if stars < Self::MIN || stars > Self::MAX {
            return Err(RatingValueError { value: stars });
        }
        Ok(Self(stars))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Human-readable label shown next to the stars.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "Poor",
            2 => "Fair",
            3 => "Good",
            4 => "Very Good",
            _ => "Excellent",
        }
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a star count falls outside `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingValueError {
    /// The rejected star count.
    pub value: u8,
}

impl fmt::Display for RatingValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rating must be between {} and {} stars (got {})",
            StarRating::MIN,
            StarRating::MAX,
            self.value
        )
    }
}

impl std::error::Error for RatingValueError {}

impl TryFrom<u8> for StarRating {
    type Error = RatingValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(value: StarRating) -> Self {
        value.0
    }
}
