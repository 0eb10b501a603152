//! Return on Capital Employed (ROCE)

use crate::error::Result;
use crate::validate;

/// EBIT as a percentage of capital employed.
///
/// # Errors
///
/// Returns [`RatioError::InvalidArgument`](crate::RatioError::InvalidArgument)
/// when `capital_employed` is not positive or `ebit` is negative.
pub fn return_on_capital_employed(ebit: f64, capital_employed: f64) -> Result<f64> {
    validate::finite("ebit", ebit)?;
    let capital = validate::positive("capital_employed", capital_employed)?;
    let ebit = validate::non_negative("ebit", ebit)?;
    validate::finite_result("return_on_capital_employed", (ebit / capital) * 100.0)
}
