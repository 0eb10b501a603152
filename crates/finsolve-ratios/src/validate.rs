//! Argument checks shared by every ratio.

use crate::error::{RatioError, Result};

pub(crate) const fn finite(argument: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RatioError::InvalidArgument {
            argument,
            reason: "should be a finite number",
        })
    }
}

/// Strictly greater than zero.
pub(crate) fn positive(argument: &'static str, value: f64) -> Result<f64> {
    if finite(argument, value)? > 0.0 {
        Ok(value)
    } else {
        Err(RatioError::InvalidArgument {
            argument,
            reason: "should be a positive number",
        })
    }
}

pub(crate) fn non_negative(argument: &'static str, value: f64) -> Result<f64> {
    if finite(argument, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(RatioError::InvalidArgument {
            argument,
            reason: "should be non-negative",
        })
    }
}

/// Reject a computed value that overflowed to infinity.
pub(crate) const fn finite_result(ratio: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RatioError::Overflow { ratio })
    }
}

pub(crate) const fn share_count(argument: &'static str, value: u64) -> Result<u64> {
    if value > 0 {
        Ok(value)
    } else {
        Err(RatioError::InvalidArgument {
            argument,
            reason: "should be greater than 0",
        })
    }
}
