#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finsolve/finsolve/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use finsolve_data as data;
pub use finsolve_ratios as ratios;

// Re-export the types most callers start from
pub use finsolve_data::{
    DirectoryConfig, DirectoryError, ErrorKind, IndexTable, InstrumentDirectory, InstrumentRecord,
    InstrumentTable, ProviderConfig,
};
pub use finsolve_ratios::{RatioCategory, RatioError, RatioInfo};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
