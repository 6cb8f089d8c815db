use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A top-level area of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dashboard,
    Services,
    Orders,
    Pools,
    Rewards,
    Messages,
    Account,
    Shipping,
    Payment,
}

impl Section {
    pub const ALL: [Self; 9] = [
        Self::Dashboard,
        Self::Services,
        Self::Orders,
        Self::Pools,
        Self::Rewards,
        Self::Messages,
        Self::Account,
        Self::Shipping,
        Self::Payment,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Services => "services",
            Self::Orders => "orders",
            Self::Pools => "pools",
            Self::Rewards => "rewards",
            Self::Messages => "messages",
            Self::Account => "account",
            Self::Shipping => "shipping",
            Self::Payment => "payment",
        }
    }

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Services => "Services",
            Self::Orders => "Orders",
            Self::Pools => "My Pools",
            Self::Rewards => "Rewards",
            Self::Messages => "Messages",
            Self::Account => "Account Settings",
            Self::Shipping => "Shipping Addresses",
            Self::Payment => "Payment Methods",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown section name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionError {
    pub input: String,
}

impl fmt::Display for ParseSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section: {}", self.input)
    }
}

impl std::error::Error for ParseSectionError {}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ParseSectionError {
                input: s.to_owned(),
            })
    }
}
