//! Return on Equity (ROE)
//!
//! Measures profitability relative to shareholder equity. Higher ROE indicates
//! more efficient use of equity capital.

use crate::error::Result;
use crate::validate;

/// Net income as a percentage of shareholders' equity.
///
/// # Errors
///
/// Returns [`RatioError::InvalidArgument`](crate::RatioError::InvalidArgument)
/// when `shareholders_equity` is not positive or `net_income` is negative.
///
/// # Example
/// ```
/// use finsolve_ratios::return_on_equity;
///
/// assert_eq!(return_on_equity(20.0, 200.0).unwrap(), 10.0);
/// assert!(return_on_equity(-1.0, 100.0).is_err());
/// ```
pub fn return_on_equity(net_income: f64, shareholders_equity: f64) -> Result<f64> {
    validate::finite("net_income", net_income)?;
    let equity = validate::positive("shareholders_equity", shareholders_equity)?;
    let income = validate::non_negative("net_income", net_income)?;
    validate::finite_result("return_on_equity", (income / equity) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(20.0, 200.0, 10.0)]
    #[case(0.0, 50.0, 0.0)]
    #[case(150.0, 100.0, 150.0)]
    fn test_return_on_equity(#[case] income: f64, #[case] equity: f64, #[case] expected: f64) {
        assert_relative_eq!(return_on_equity(income, equity).unwrap(), expected);
    }

    #[test]
    fn test_negative_income_rejected() {
        let err = return_on_equity(-1.0, 100.0).unwrap_err();
        assert_eq!(err.argument(), Some("net_income"));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-100.0)]
    fn test_non_positive_equity_rejected(#[case] equity: f64) {
        let err = return_on_equity(20.0, equity).unwrap_err();
        assert_eq!(err.argument(), Some("shareholders_equity"));
    }

    #[test]
    fn test_equity_checked_before_income() {
        let err = return_on_equity(-1.0, 0.0).unwrap_err();
        assert_eq!(err.argument(), Some("shareholders_equity"));
    }

    #[test]
    fn test_overflow_rejected() {
        let err = return_on_equity(1e308, 1e-10).unwrap_err();
        assert!(matches!(err, crate::RatioError::Overflow { .. }));
    }
}
