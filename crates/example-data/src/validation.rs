//! Identifier checks shared by every registry collection.
//!
//! Each collection in a registry is keyed by a string id. Ids must be
//! non-blank and unique within their collection; ids may repeat across
//! collections.

use std::collections::HashSet;

use crate::error::RegistryError;

/// Checks that every id yielded by `ids` is non-blank and unique.
///
/// # Errors
///
/// Returns [`RegistryError::BlankId`] for the first blank id, or
/// [`RegistryError::DuplicateId`] for the first repeated id.
///
/// # Examples
///
/// ```
/// use example_data::ensure_unique_ids;
///
/// assert!(ensure_unique_ids("pools", ["main-pool", "spa"]).is_ok());
/// assert!(ensure_unique_ids("pools", ["spa", "spa"]).is_err());
/// assert!(ensure_unique_ids("pools", ["  "]).is_err());
/// ```
pub fn ensure_unique_ids<'a, I>(collection: &'static str, ids: I) -> Result<(), RegistryError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for (index, id) in ids.into_iter().enumerate() {
        if id.trim().is_empty() {
            return Err(RegistryError::BlankId { collection, index });
        }
        if !seen.insert(id) {
            return Err(RegistryError::DuplicateId {
                collection,
                index,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(&[])]
    #[case::single(&["ORD-001"])]
    #[case::distinct(&["ORD-001", "ORD-002", "ORD-003"])]
    fn accepts_unique_ids(#[case] ids: &[&str]) {
        assert!(ensure_unique_ids("orders", ids.iter().copied()).is_ok());
    }

    #[rstest]
    fn reports_index_of_second_occurrence() {
        let result = ensure_unique_ids("orders", ["ORD-001", "ORD-002", "ORD-001"]);
        assert_eq!(
            result,
            Err(RegistryError::DuplicateId {
                collection: "orders",
                index: 2,
                id: "ORD-001".to_owned(),
            })
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    fn rejects_blank_ids(#[case] id: &str) {
        let result = ensure_unique_ids("messages", ["msg-001", id]);
        assert_eq!(
            result,
            Err(RegistryError::BlankId {
                collection: "messages",
                index: 1,
            })
        );
    }
}
