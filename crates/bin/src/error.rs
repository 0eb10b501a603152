//! CLI error type and its JSON rendering.

use finsolve::data::{DirectoryError, ErrorKind};
use finsolve::ratios::RatioError;
use serde_json::{Value, json};
use thiserror::Error;

/// Anything a command can fail with.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Ratio evaluation failed
    #[error(transparent)]
    Ratio(#[from] RatioError),

    /// Directory lookup failed
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// `--category` named no known category
    #[error("Unknown ratio category '{0}'")]
    UnknownCategory(String),

    /// Output could not be serialized
    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Error payload printed instead of a result.
    pub(crate) fn to_json(&self) -> Value {
        let kind = match self {
            Self::Directory(e) => e.kind(),
            Self::Ratio(_) | Self::UnknownCategory(_) => ErrorKind::InvalidArgument,
            Self::Output(_) => ErrorKind::Schema,
        };
        json!({ "error": self.to_string(), "kind": kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_error_json() {
        let err = CliError::from(DirectoryError::SymbolNotFound("XYZ".to_string()));
        let value = err.to_json();
        assert_eq!(
            value["error"],
            "Information for 'XYZ' is not available or the symbol is invalid."
        );
        assert_eq!(value["kind"], "not_found");
    }

    #[test]
    fn test_ratio_error_json() {
        let err = CliError::from(RatioError::UnknownRatio("beta".to_string()));
        assert_eq!(err.to_json()["kind"], "invalid_argument");
    }

    #[test]
    fn test_overflow_is_invalid_argument() {
        let err = CliError::from(RatioError::Overflow {
            ratio: "years_to_double",
        });
        assert_eq!(err.to_json()["kind"], "invalid_argument");
    }
}
