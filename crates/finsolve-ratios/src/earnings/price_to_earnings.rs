//! Price-to-Earnings (P/E) Ratio
//!
//! Market price of a share divided by its earnings per share. Negative
//! earnings produce a negative ratio; zero earnings have no defined ratio.

use crate::earnings::eps::earnings_per_share;
use crate::error::{RatioError, Result};
use crate::validate;

/// Price-to-earnings ratio from total earnings, share count and share price.
///
/// # Errors
///
/// Returns [`RatioError::InvalidArgument`] when `no_of_shares` is zero,
/// `current_market_price` is not positive, or `earnings` is zero or not finite.
///
/// # Example
/// ```
/// use finsolve_ratios::price_to_earnings;
///
/// assert_eq!(price_to_earnings(50.0, 10, 25.0).unwrap(), 5.0);
/// ```
pub fn price_to_earnings(
    earnings: f64,
    no_of_shares: u64,
    current_market_price: f64,
) -> Result<f64> {
    validate::finite("earnings", earnings)?;
    validate::finite("current_market_price", current_market_price)?;
    validate::share_count("no_of_shares", no_of_shares)?;
    let price = validate::positive("current_market_price", current_market_price)?;

    let eps = earnings_per_share(earnings, no_of_shares)?;
    if eps == 0.0 {
        return Err(RatioError::InvalidArgument {
            argument: "earnings",
            reason: "should be non-zero",
        });
    }

    validate::finite_result("price_to_earnings", price / eps)
}
