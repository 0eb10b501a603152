//! Dividend amount implied by a yield percentage.

use crate::error::Result;
use crate::validate;

/// Dividend paid per share for a yield of `dividend_yield_percentage` percent.
///
/// # Errors
///
/// Returns [`RatioError::InvalidArgument`](crate::RatioError::InvalidArgument)
/// when `price_per_share` is not positive or the percentage is negative.
///
/// # Example
/// ```
/// use finsolve_ratios::dividend_yield;
///
/// assert_eq!(dividend_yield(4.0, 250.0).unwrap(), 10.0);
/// ```
pub fn dividend_yield(dividend_yield_percentage: f64, price_per_share: f64) -> Result<f64> {
    validate::finite("dividend_yield_percentage", dividend_yield_percentage)?;
    let price = validate::positive("price_per_share", price_per_share)?;
    let pct = validate::non_negative("dividend_yield_percentage", dividend_yield_percentage)?;
    validate::finite_result("dividend_yield", (price / 100.0) * pct)
}
