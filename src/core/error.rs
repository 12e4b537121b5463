//! Error types for catalog construction and lookups

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building or querying a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records in the same catalog share a name
    #[error("Duplicate record name in {catalog} catalog: '{name}'")]
    DuplicateName {
        /// Catalog that rejected the record
        catalog: &'static str,
        /// The repeated name
        name: String,
    },

    /// No module carries the requested name
    #[error("Module not found: '{0}'")]
    ModuleNotFound(String),

    /// No API integration carries the requested name
    #[error("API not found: '{0}'")]
    IntegrationNotFound(String),

    /// A category label did not match any known category
    #[error("Unknown category '{value}'. Expected one of: {expected}")]
    UnknownCategory {
        /// The label that failed to parse
        value: String,
        /// Comma-separated list of valid labels
        expected: String,
    },

    /// A complexity label was not Low, Medium or High
    #[error("Unknown complexity level '{0}'. Expected one of: Low, Medium, High")]
    UnknownComplexity(String),
}

impl CatalogError {
    /// Build an `UnknownCategory` error listing the valid labels
    pub(crate) fn unknown_category(value: &str, labels: &[&str]) -> Self {
        Self::UnknownCategory {
            value: value.to_string(),
            expected: labels.join(", "),
        }
    }
}
