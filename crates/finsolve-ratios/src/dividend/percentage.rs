//! Dividend yield as a percentage of price.

use crate::error::Result;
use crate::validate;

/// Annual dividend as a percentage of the share price.
///
/// # Errors
///
/// Returns [`RatioError::InvalidArgument`](crate::RatioError::InvalidArgument)
/// when `price_per_share` is not positive or `annual_dividend` is not finite.
///
/// # Example
/// ```
/// use finsolve_ratios::dividend_yield_percentage;
///
/// assert_eq!(dividend_yield_percentage(10.0, 250.0).unwrap(), 4.0);
/// ```
pub fn dividend_yield_percentage(annual_dividend: f64, price_per_share: f64) -> Result<f64> {
    let dividend = validate::finite("annual_dividend", annual_dividend)?;
    let price = validate::positive("price_per_share", price_per_share)?;
    validate::finite_result("dividend_yield_percentage", (dividend / price) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dividend_yield_percentage() {
        assert_relative_eq!(dividend_yield_percentage(10.0, 250.0).unwrap(), 4.0);
        assert_relative_eq!(dividend_yield_percentage(0.0, 250.0).unwrap(), 0.0);
    }

    #[test]
    fn test_non_positive_price_rejected() {
        assert_eq!(
            dividend_yield_percentage(10.0, 0.0).unwrap_err().argument(),
            Some("price_per_share")
        );
        assert_eq!(
            dividend_yield_percentage(10.0, -250.0).unwrap_err().argument(),
            Some("price_per_share")
        );
    }

    #[test]
    fn test_non_finite_dividend_rejected() {
        assert_eq!(
            dividend_yield_percentage(f64::NAN, 250.0).unwrap_err().argument(),
            Some("annual_dividend")
        );
    }

    #[test]
    fn test_overflow_rejected() {
        let err = dividend_yield_percentage(1e308, 1e-300).unwrap_err();
        assert!(matches!(err, crate::RatioError::Overflow { .. }));
    }
}
