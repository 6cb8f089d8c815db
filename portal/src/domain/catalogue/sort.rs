//! Sort keys offered by the service catalogue.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Service;

/// The catalogue's sort selector.
///
/// # Examples
///
/// ```
/// use portal::domain::ServiceSortKey;
///
/// let key: ServiceSortKey = "price-high".parse().expect("known key");
/// assert_eq!(key, ServiceSortKey::PriceHighToLow);
/// assert_eq!(ServiceSortKey::default(), ServiceSortKey::MostPopular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServiceSortKey {
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
    #[serde(rename = "newest")]
    Newest,
    /// Popular services first, catalogue order otherwise.
    #[default]
    #[serde(rename = "popular")]
    MostPopular,
}

impl ServiceSortKey {
    pub const ALL: [Self; 4] = [
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::Newest,
        Self::MostPopular,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Newest => "newest",
            Self::MostPopular => "popular",
        }
    }

    /// Label shown in the sort dropdown.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Newest => "Newest",
            Self::MostPopular => "Most Popular",
        }
    }

    /// Orders two services under this key.
    ///
    /// Ties compare equal so that a stable sort keeps catalogue order.
    pub fn compare(self, a: &Service, b: &Service) -> Ordering {
        match self {
            Self::PriceLowToHigh => a.price().cmp(&b.price()),
            Self::PriceHighToLow => b.price().cmp(&a.price()),
            Self::Newest => b.created_at().cmp(&a.created_at()),
            Self::MostPopular => b.is_popular().cmp(&a.is_popular()),
        }
    }
}

impl fmt::Display for ServiceSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortKeyError {
    /// The unrecognised input value.
    pub input: String,
}

impl fmt::Display for ParseSortKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort key: {}", self.input)
    }
}

impl std::error::Error for ParseSortKeyError {}

impl FromStr for ServiceSortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseSortKeyError {
                input: s.to_owned(),
            })
    }
}
