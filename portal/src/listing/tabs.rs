//! Tab-scoped views with per-category badge counts.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::{Message, MessageKind, Order, OrderStatus};

/// Records that fall into exactly one tab category.
pub trait Categorised {
    type Category: Copy + Ord + fmt::Display + FromStr;

    /// The tab this record is listed under.
    fn category(&self) -> Self::Category;
}

impl Categorised for Order {
    type Category = OrderStatus;

    fn category(&self) -> OrderStatus {
        self.status()
    }
}

impl Categorised for Message {
    type Category = MessageKind;

    fn category(&self) -> MessageKind {
        self.kind()
    }
}

/// The active tab: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabFilter<C> {
    All,
    Only(C),
}

impl<C> Default for TabFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Copy + Eq> TabFilter<C> {
    /// Whether records of `category` show under this tab.
    pub fn admits(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl<C: fmt::Display> fmt::Display for TabFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

/// Error returned when a tab name is neither `all` nor a known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTabError {
    pub input: String,
}

impl fmt::Display for ParseTabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab: {}", self.input)
    }
}

impl std::error::Error for ParseTabError {}

impl<C: FromStr> FromStr for TabFilter<C> {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only).map_err(|_| ParseTabError {
            input: s.to_owned(),
        })
    }
}

/// Badge counts for every tab, taken over the whole master list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts<C: Ord> {
    total: usize,
    by_category: BTreeMap<C, usize>,
}

impl<C: Copy + Ord> CategoryCounts<C> {
    /// Counts every record in `master` once, under its own category.
    pub fn tally<T>(master: &[T]) -> Self
    where
        T: Categorised<Category = C>,
    {
        let mut by_category = BTreeMap::new();
        for record in master {
            *by_category.entry(record.category()).or_insert(0) += 1;
        }
        Self {
            total: master.len(),
            by_category,
        }
    }

    /// Badge for the `all` tab.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Records in `category`; zero when none were seen.
    pub fn count(&self, category: C) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    /// The badge shown on `tab`.
    pub fn for_tab(&self, tab: TabFilter<C>) -> usize {
        match tab {
            TabFilter::All => self.total,
            TabFilter::Only(category) => self.count(category),
        }
    }

    /// The `all` badge followed by one badge per listed category.
    pub fn badges(&self, categories: impl IntoIterator<Item = C>) -> Vec<(TabFilter<C>, usize)> {
        std::iter::once((TabFilter::All, self.total))
            .chain(
                categories
                    .into_iter()
                    .map(|category| (TabFilter::Only(category), self.count(category))),
            )
            .collect()
    }
}

/// Tab selection for one list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabbedView<C> {
    active: TabFilter<C>,
}

impl<C> Default for TabbedView<C> {
    fn default() -> Self {
        Self {
            active: TabFilter::All,
        }
    }
}

impl<C: Copy + Ord> TabbedView<C> {
    /// The selected tab. New views start on [`TabFilter::All`].
    pub fn active(&self) -> TabFilter<C> {
        self.active
    }

    /// Switches tabs. Other screen state is left alone.
    pub fn select(&mut self, tab: TabFilter<C>) {
        self.active = tab;
    }

    /// Records in the active tab, in master-list order.
    pub fn view<'a, T>(&self, master: &'a [T]) -> Vec<&'a T>
    where
        T: Categorised<Category = C>,
    {
        let active = self.active;
        master
            .iter()
            .filter(|record| active.admits(record.category()))
            .collect()
    }

    /// Badge counts; independent of the active tab.
    pub fn counts<T>(&self, master: &[T]) -> CategoryCounts<C>
    where
        T: Categorised<Category = C>,
    {
        CategoryCounts::tally(master)
    }
}
