//! Derived views over master lists.
//!
//! A master list is never modified. Screens hold the active facet filters,
//! sort key and tab, and recompute the derived list from scratch whenever one
//! of them changes. Lists are small, so there is no incremental update.

mod derive;
mod facet;
mod tabs;


pub use derive::derive_list;
pub use facet::FacetFilter;
pub use tabs::{Categorised, CategoryCounts, ParseTabError, TabFilter, TabbedView};
