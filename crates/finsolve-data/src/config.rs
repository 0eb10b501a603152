//! Configuration objects for the directory and its remote provider.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Alpha Vantage API base URL
pub const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co";

/// Remote provider endpoint and credentials.
///
/// No timeout is applied unless one is set; callers that need bounded latency
/// should set [`ProviderConfig::timeout`].
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL, without the `/query` path
    pub base_url: String,
    /// API key; remote lookups fail with `MissingApiKey` when absent
    pub api_key: Option<String>,
    /// Whole-request timeout
    pub timeout: Option<Duration>,
}

impl ProviderConfig {
    /// Default endpoint with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Whether a non-empty API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: ALPHA_VANTAGE_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Where the directory loads its tables from, and how it reaches the provider.
///
/// A `None` path selects the table bundled with this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Instrument table CSV
    pub instruments_path: Option<PathBuf>,
    /// Index table CSV
    pub indices_path: Option<PathBuf>,
    /// Remote provider settings
    pub provider: ProviderConfig,
}

impl DirectoryConfig {
    /// Load instruments from `path` instead of the bundled table.
    pub fn with_instruments_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.instruments_path = Some(path.into());
        self
    }

    /// Load indices from `path` instead of the bundled table.
    pub fn with_indices_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.indices_path = Some(path.into());
        self
    }

    /// Replace the provider settings.
    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.provider = provider;
        self
    }
}
