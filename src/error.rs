//! Error types for catalog loading.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading the catalog.
///
/// A quote id missing from the catalog is not represented here: the quote
/// renderer stops at it silently and reports it through `Quote::stopped_at`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure, unreadable file, or a non-2xx response.
    #[error("network error: {message}")]
    Network {
        /// Description of the transport failure.
        message: String,
    },

    /// The body is not valid JSON, lacks `products`, or holds a malformed entry.
    #[error("parse error: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },
}

impl CatalogError {
    pub(crate) fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }

    /// Diagnostic line logged when loading fails.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Parse { .. } => "Syntax error on the JSON file.".to_string(),
            Self::Network { message } => message.clone(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::parse(e.to_string())
    }
}
