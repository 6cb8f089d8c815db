//! Error types for the example-data crate.
//!
//! Registry parsing and validation failures are reported through a single
//! semantic error enum built with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
///
/// These errors cover file I/O, JSON parsing, schema validation, and record
/// lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no services to book.
    #[error("registry contains no services")]
    EmptyServices,

    /// The registry contains no membership tiers.
    #[error("registry contains no membership tiers")]
    EmptyTiers,

    /// Two records in one collection share an identifier.
    #[error("duplicate {collection} id '{id}' at index {index}")]
    DuplicateId {
        /// Collection holding the duplicate, for example `services`.
        collection: &'static str,
        /// Index of the second occurrence.
        index: usize,
        /// The repeated identifier.
        id: String,
    },

    /// A record identifier is empty or whitespace.
    #[error("blank {collection} id at index {index}")]
    BlankId {
        /// Collection holding the record.
        collection: &'static str,
        /// Index of the record.
        index: usize,
    },

    /// The requested service was not found in the registry.
    #[error("service '{id}' not found in registry")]
    ServiceNotFound {
        /// The service id that was not found.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_error_io_formats_correctly() {
        let err = RegistryError::IoError {
            path: PathBuf::from("/tmp/seeds.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read registry file at '/tmp/seeds.json': file not found"
        );
    }

    #[test]
    fn registry_error_parse_formats_correctly() {
        let err = RegistryError::ParseError {
            message: "unexpected token".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid registry JSON: unexpected token");
    }

    #[test]
    fn registry_error_version_formats_correctly() {
        let err = RegistryError::UnsupportedVersion {
            expected: 1,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "unsupported registry version: expected 1, found 2"
        );
    }

    #[test]
    fn registry_error_duplicate_id_formats_correctly() {
        let err = RegistryError::DuplicateId {
            collection: "orders",
            index: 3,
            id: "ORD-001".to_owned(),
        };
        assert_eq!(err.to_string(), "duplicate orders id 'ORD-001' at index 3");
    }

    #[test]
    fn registry_error_blank_id_formats_correctly() {
        let err = RegistryError::BlankId {
            collection: "pools",
            index: 0,
        };
        assert_eq!(err.to_string(), "blank pools id at index 0");
    }

    #[test]
    fn registry_error_empty_collections_format_correctly() {
        assert_eq!(
            RegistryError::EmptyServices.to_string(),
            "registry contains no services"
        );
        assert_eq!(
            RegistryError::EmptyTiers.to_string(),
            "registry contains no membership tiers"
        );
    }

    #[test]
    fn registry_error_service_not_found_formats_correctly() {
        let err = RegistryError::ServiceNotFound {
            id: "opening-9".to_owned(),
        };
        assert_eq!(err.to_string(), "service 'opening-9' not found in registry");
    }
}
