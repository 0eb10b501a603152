//! Dividend ratios
//!
//! [`dividend_yield_percentage`] turns a dividend amount into a percentage of
//! the share price; [`dividend_yield`] turns such a percentage back into an
//! amount. For matching inputs the two are inverses.

pub mod amount;
pub mod percentage;

pub use amount::dividend_yield;
pub use percentage::dividend_yield_percentage;
