#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finsolve/finsolve/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod compounding;
pub mod dividend;
pub mod earnings;
pub mod error;
pub mod quality;
pub mod registry;
pub mod value;

mod validate;

pub use error::{RatioError, Result};

// Re-export every ratio at the crate root
pub use compounding::{years_to_double, years_to_triple};
pub use dividend::{dividend_yield, dividend_yield_percentage};
pub use earnings::{earnings_per_share, price_to_earnings};
pub use quality::{debt_to_equity, return_on_capital_employed, return_on_equity};
pub use value::price_to_book;

// Re-export registry types for convenience
pub use registry::{
    RatioCategory, RatioInfo, RatioUnit, available_ratios, evaluate, get_ratio_info,
    ratios_by_category,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
