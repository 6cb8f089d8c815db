//! Field-level form validation state.
//!
//! Forms collect inline errors keyed by field. Errors are non-fatal and an
//! edit to a field clears that field's error immediately.

use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Message shown beneath an empty required field.
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required";

/// Inline validation errors keyed by field.
///
/// # Examples
///
/// ```
/// use portal::domain::{FieldErrors, REQUIRED_FIELD_MESSAGE};
///
/// let mut errors = FieldErrors::default();
/// errors.require("city", "   ");
/// assert_eq!(errors.get("city"), Some(REQUIRED_FIELD_MESSAGE));
///
/// errors.clear("city");
/// assert!(errors.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<K = &'static str>
where
    K: Ord,
{
    errors: BTreeMap<K, &'static str>,
}

impl<K: Ord> Default for FieldErrors<K> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<K: Ord> FieldErrors<K> {
    /// Records a required-field error when `value` is blank.
    pub fn require(&mut self, field: K, value: &str) {
        if value.trim().is_empty() {
            self.errors.insert(field, REQUIRED_FIELD_MESSAGE);
        }
    }

    /// Records an arbitrary error message for a field.
    pub fn insert(&mut self, field: K, message: &'static str) {
        self.errors.insert(field, message);
    }

    /// Removes any error recorded for `field`.
    pub fn clear(&mut self, field: impl Borrow<K>) {
        self.errors.remove(field.borrow());
    }

    #[must_use]
    pub fn get(&self, field: impl Borrow<K>) -> Option<&'static str> {
        self.errors.get(field.borrow()).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &'static str)> {
        self.errors.iter().map(|(field, message)| (field, *message))
    }
}
