//! Error types for directory operations.

use serde::Serialize;
use thiserror::Error;

/// Result type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Errors that can occur while loading tables or answering a lookup.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Argument rejected before any lookup happened
    #[error("{0}")]
    InvalidArgument(String),

    /// Symbol absent from the local table and unknown to the provider
    #[error("Information for '{0}' is not available or the symbol is invalid.")]
    SymbolNotFound(String),

    /// Index absent from the local table
    #[error("Information for '{0}' is not available or the index is invalid.")]
    IndexNotFound(String),

    /// Remote provider answered with a failure
    #[error("API request failed: {0}")]
    ExternalService(String),

    /// Remote fallback needed but no API key was configured
    #[error("API request failed: no API key configured for the remote provider")]
    MissingApiKey,

    /// Network error
    #[error("API request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider payload could not be decoded
    #[error("Malformed provider response: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Expected table column missing
    #[error("Column not found: {0}")]
    Schema(String),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`DirectoryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Bad caller input
    InvalidArgument,
    /// Symbol or index unknown everywhere it was looked for
    NotFound,
    /// Network or provider failure during the remote fallback
    ExternalServiceFailure,
    /// Local table missing a column or unreadable
    Schema,
}

impl DirectoryError {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::SymbolNotFound(_) | Self::IndexNotFound(_) => ErrorKind::NotFound,
            Self::ExternalService(_)
            | Self::MissingApiKey
            | Self::Network(_)
            | Self::Serialization(_) => ErrorKind::ExternalServiceFailure,
            Self::Schema(_) | Self::Csv(_) | Self::Io(_) => ErrorKind::Schema,
        }
    }

    /// Convert into the serializable `{"error": ...}` shape.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            kind: self.kind(),
        }
    }
}

/// Error value handed back to callers of the directory.
///
/// Serializes as `{"error": "<message>", "kind": "<kind>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Human readable message
    pub error: String,
    /// Error classification
    pub kind: ErrorKind,
}

impl From<DirectoryError> for ErrorResponse {
    fn from(err: DirectoryError) -> Self {
        err.to_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DirectoryError::SymbolNotFound("XYZ".to_string());
        assert_eq!(
            err.to_string(),
            "Information for 'XYZ' is not available or the symbol is invalid."
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            DirectoryError::InvalidArgument("x".into()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            DirectoryError::IndexNotFound("x".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            DirectoryError::MissingApiKey.kind(),
            ErrorKind::ExternalServiceFailure
        );
        assert_eq!(
            DirectoryError::Schema("index".into()).kind(),
            ErrorKind::Schema
        );
    }

    #[test]
    fn test_response_shape() {
        let response = DirectoryError::Schema("index".to_string()).to_response();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Column not found: index");
        assert_eq!(json["kind"], "schema");
    }
}
