//! Debt-to-Equity Ratio
//!
//! Measures financial leverage. Lower values indicate a balance sheet funded
//! mostly by shareholders rather than lenders.

use crate::error::Result;
use crate::validate;

/// Total debt as a percentage of shareholders' equity.
///
/// # Errors
///
/// Returns [`RatioError::InvalidArgument`](crate::RatioError::InvalidArgument)
/// when `shareholders_equity` is not positive or `total_debt` is negative.
pub fn debt_to_equity(total_debt: f64, shareholders_equity: f64) -> Result<f64> {
    validate::finite("total_debt", total_debt)?;
    let equity = validate::positive("shareholders_equity", shareholders_equity)?;
    let debt = validate::non_negative("total_debt", total_debt)?;
    validate::finite_result("debt_to_equity", (debt / equity) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(50.0, 100.0, 50.0)]
    #[case(0.0, 100.0, 0.0)]
    #[case(300.0, 150.0, 200.0)]
    fn test_debt_to_equity(#[case] debt: f64, #[case] equity: f64, #[case] expected: f64) {
        assert_relative_eq!(debt_to_equity(debt, equity).unwrap(), expected);
    }

    #[test]
    fn test_negative_debt_rejected() {
        assert_eq!(
            debt_to_equity(-10.0, 100.0).unwrap_err().argument(),
            Some("total_debt")
        );
    }

    #[test]
    fn test_zero_equity_rejected() {
        assert_eq!(
            debt_to_equity(10.0, 0.0).unwrap_err().argument(),
            Some("shareholders_equity")
        );
    }

    #[test]
    fn test_equity_checked_before_debt() {
        let err = debt_to_equity(-1.0, 0.0).unwrap_err();
        assert_eq!(err.argument(), Some("shareholders_equity"));
    }

    #[test]
    fn test_overflow_rejected() {
        let err = debt_to_equity(1e308, 0.5).unwrap_err();
        assert!(matches!(err, crate::RatioError::Overflow { .. }));
    }
}
