//! Earnings Per Share (EPS)

use crate::error::Result;
use crate::validate;

/// Earnings available to each outstanding share.
///
/// `earnings` may be negative (a loss); `no_of_shares` must be at least one.
///
/// # Errors
///
/// Returns [`RatioError::InvalidArgument`](crate::RatioError::InvalidArgument)
/// when `earnings` is not finite or `no_of_shares` is zero.
///
/// # Example
/// ```
/// use finsolve_ratios::earnings_per_share;
///
/// assert_eq!(earnings_per_share(100.0, 10).unwrap(), 10.0);
/// assert!(earnings_per_share(100.0, 0).is_err());
/// ```
pub fn earnings_per_share(earnings: f64, no_of_shares: u64) -> Result<f64> {
    let earnings = validate::finite("earnings", earnings)?;
    let shares = validate::share_count("no_of_shares", no_of_shares)?;
    Ok(earnings / shares as f64)
}
