//! Alpha Vantage company overview provider.
//!
//! Used as the fallback for symbols the local instrument table does not know:
//! - [`AlphaVantageClient`] issues one blocking `OVERVIEW` request per lookup
//! - [`CompanyOverview`] holds the fields of the response this crate uses
//! - [`OverviewSource`] is the seam the directory talks to, so tests and
//!   callers can substitute their own source

pub mod client;
pub mod overview;

pub use client::{AlphaVantageClient, OverviewSource};
pub use overview::CompanyOverview;
