//! Earnings ratios - per-share earnings and the price paid for them
//!
//! EPS spreads after-tax earnings over the outstanding share count; the P/E
//! ratio compares the market price of one share with its EPS.

pub mod eps;
pub mod price_to_earnings;

pub use eps::earnings_per_share;
pub use price_to_earnings::price_to_earnings;
