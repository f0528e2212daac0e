//! Error types for catalog operations

use thiserror::Error;

/// Errors that can occur in catalog operations
///
/// Field-level defects in remote records are never surfaced here: the
/// normalizer absorbs them (see `domain::normalize`). These variants cover
/// the failures a caller must distinguish to render a sensible state:
/// "not found" vs "could not load", and timeout vs other transport failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required field was missing or empty; caught before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote lookup returned empty for the given id
    #[error("Record not found: {id}")]
    NotFound {
        /// Identifier that failed to resolve
        id: String,
    },

    /// A concurrent writer was detected via a conditional write
    ///
    /// Reserved: the store client does not issue conditional writes today,
    /// so nothing constructs this variant. The taxonomy keeps room for it
    /// so callers can match on it once conditional writes land.
    #[error("Conflicting concurrent write: {0}")]
    Conflict(String),

    /// The request exceeded the configured timeout
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Transport failure other than a timeout
    #[error("Network error: {0}")]
    Network(String),

    /// The remote record was too malformed to coerce (e.g. non-object body)
    #[error("Malformed remote data: {0}")]
    MalformedData(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout(err.to_string())
        } else {
            CatalogError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::MalformedData(err.to_string())
    }
}
