//! Error types for ratio calculations.

use thiserror::Error;

/// Result type for ratio calculations.
pub type Result<T> = std::result::Result<T, RatioError>;

/// Errors that can occur while computing a ratio.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioError {
    /// An argument is out of range or not a finite number
    #[error("The argument `{argument}` {reason}.")]
    InvalidArgument {
        /// Name of the offending argument
        argument: &'static str,
        /// What the argument should have been
        reason: &'static str,
    },

    /// The inputs were valid but the ratio is too large to represent
    #[error("Ratio `{ratio}` is not a finite number for the given inputs.")]
    Overflow {
        /// Registry name of the ratio
        ratio: &'static str,
    },

    /// A ratio was requested by a name the registry does not know
    #[error("Unknown ratio: {0}")]
    UnknownRatio(String),

    /// A ratio was evaluated with the wrong number of inputs
    #[error("Ratio `{ratio}` expects {expected} inputs, got {actual}")]
    Arity {
        /// Registry name of the ratio
        ratio: &'static str,
        /// Number of inputs the ratio takes
        expected: usize,
        /// Number of inputs supplied
        actual: usize,
    },
}

impl RatioError {
    /// Returns the name of the argument that failed validation, if any.
    pub const fn argument(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { argument, .. } => Some(argument),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = RatioError::InvalidArgument {
            argument: "no_of_shares",
            reason: "should be greater than 0",
        };
        assert_eq!(
            err.to_string(),
            "The argument `no_of_shares` should be greater than 0."
        );
        assert_eq!(err.argument(), Some("no_of_shares"));
    }

    #[test]
    fn test_arity_message() {
        let err = RatioError::Arity {
            ratio: "price_to_book",
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Ratio `price_to_book` expects 2 inputs, got 3");
        assert_eq!(err.argument(), None);
    }

    #[test]
    fn test_overflow_message() {
        let err = RatioError::Overflow {
            ratio: "years_to_double",
        };
        assert_eq!(
            err.to_string(),
            "Ratio `years_to_double` is not a finite number for the given inputs."
        );
        assert_eq!(err.argument(), None);
    }
}
