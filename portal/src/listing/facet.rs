//! Inclusive multi-select filters.

use std::borrow::Borrow;
use std::collections::BTreeSet;

/// The selected values of one facet, such as the company filter.
///
/// An empty selection matches every record. Otherwise a record matches when
/// its value is any one of the selected values.
///
/// # Examples
///
/// ```
/// use portal::listing::FacetFilter;
///
/// let mut companies = FacetFilter::default();
/// assert!(companies.matches("AquaPro Services"));
///
/// companies.toggle("Crystal Clear Pools".to_owned());
/// assert!(!companies.matches("AquaPro Services"));
/// assert!(companies.matches("Crystal Clear Pools"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetFilter<V: Ord> {
    selected: BTreeSet<V>,
}

impl<V: Ord> Default for FacetFilter<V> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<V: Ord> FacetFilter<V> {
    /// Selects `value`, or deselects it when already selected.
    ///
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, value: V) -> bool {
        if self.selected.remove(&value) {
            false
        } else {
            self.selected.insert(value);
            true
        }
    }

    /// Deselects everything, so every record matches again.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Whether `value` is explicitly selected.
    ///
    /// Unlike [`matches`](Self::matches) this is `false` for every value
    /// while the selection is empty.
    pub fn is_selected<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.selected.contains(value)
    }

    /// Whether a record carrying `value` passes the filter.
    pub fn matches<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.selected.is_empty() || self.selected.contains(value)
    }

    /// True when no value is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Selected values in ascending order.
    pub fn selected(&self) -> impl Iterator<Item = &V> {
        self.selected.iter()
    }
}
