//! Rule of 114

use crate::error::Result;
use crate::validate;

/// Numerator of the Rule of 114.
pub const RULE_OF_114: f64 = 114.0;

/// Years required to triple an investment at `interest` percent per year.
///
/// # Errors
///
/// Returns [`RatioError::InvalidArgument`](crate::RatioError::InvalidArgument)
/// when `interest` is not a positive, finite number.
pub fn years_to_triple(interest: f64) -> Result<f64> {
    let interest = validate::positive("interest", interest)?;
    validate::finite_result("years_to_triple", RULE_OF_114 / interest)
}
