#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finsolve/finsolve/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod alphavantage;
pub mod config;
pub mod directory;
pub mod error;
pub mod record;
pub mod tables;

pub use alphavantage::{AlphaVantageClient, CompanyOverview, OverviewSource};
pub use config::{ALPHA_VANTAGE_BASE_URL, DirectoryConfig, ProviderConfig};
pub use directory::InstrumentDirectory;
pub use error::{DirectoryError, ErrorKind, ErrorResponse, Result};
pub use record::{
    IndexDescription, InstrumentRecord, MarketCap, MarketCapUnit, NO_DESCRIPTION, NOT_AVAILABLE,
    RecordSource,
};
pub use tables::{IndexRecord, IndexTable, InstrumentTable};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_directory_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InstrumentDirectory>();
    }
}
