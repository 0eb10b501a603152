//! Rule of 72
//!
//! Divides 72 by the annual rate of return to approximate the number of years
//! an investment needs to double.

use crate::error::Result;
use crate::validate;

/// Numerator of the Rule of 72.
pub const RULE_OF_72: f64 = 72.0;

/// Years required to double an investment at `interest` percent per year.
///
/// # Errors
///
/// Returns [`RatioError::InvalidArgument`](crate::RatioError::InvalidArgument)
/// when `interest` is not a positive, finite number, and
/// [`RatioError::Overflow`](crate::RatioError::Overflow) when it is so small the
/// result is infinite.
///
/// # Example
/// ```
/// use finsolve_ratios::years_to_double;
///
/// assert_eq!(years_to_double(8.0).unwrap(), 9.0);
/// assert!(years_to_double(0.0).is_err());
/// ```
pub fn years_to_double(interest: f64) -> Result<f64> {
    let interest = validate::positive("interest", interest)?;
    validate::finite_result("years_to_double", RULE_OF_72 / interest)
}
