//! Error types for catalog and reference fetches

use thiserror::Error;

/// Unified error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Record is missing its label or self URL
    #[error("Malformed item: {0}")]
    MalformedItem(String),
    /// Category tag not recognized
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl CatalogError {
    /// True for failures that came from talking to the remote API.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            CatalogError::Network(_) | CatalogError::HttpStatus(_) | CatalogError::Parse(_)
        )
    }
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
