//! Alpha Vantage HTTP client.

use crate::alphavantage::overview::{CompanyOverview, parse_overview};
use crate::config::ProviderConfig;
use crate::error::{DirectoryError, Result};
use std::fmt;

/// Query function for the company overview endpoint
const OVERVIEW_FUNCTION: &str = "OVERVIEW";

/// User agent sent with every request
const USER_AGENT: &str = concat!("finsolve/", env!("CARGO_PKG_VERSION"));

/// Anything that can answer "what does the provider know about this symbol".
///
/// `Ok(None)` means the provider answered but does not know the symbol.
pub trait OverviewSource: Send + Sync + fmt::Debug {
    /// Fetch the company overview for `symbol`.
    fn overview(&self, symbol: &str) -> Result<Option<CompanyOverview>>;
}

/// Blocking client for the Alpha Vantage `OVERVIEW` endpoint.
pub struct AlphaVantageClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: Option<String>,
}

impl AlphaVantageClient {
    /// Create a client from provider settings.
    ///
    /// A missing API key is not an error here; each request then fails with
    /// [`DirectoryError::MissingApiKey`].
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(DirectoryError::Network)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty()),
        })
    }

    /// URL of the query endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/query", self.base_url)
    }

    /// Fetch the raw response body for `symbol`.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::MissingApiKey`] without a key,
    /// [`DirectoryError::Network`] when the request cannot be completed and
    /// [`DirectoryError::ExternalService`] for a non-success HTTP status.
    pub fn fetch_overview_body(&self, symbol: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(DirectoryError::MissingApiKey)?;

        tracing::debug!(symbol, endpoint = %self.endpoint(), "requesting company overview");
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("function", OVERVIEW_FUNCTION),
                ("symbol", symbol),
                ("apikey", api_key),
            ])
            .send()
            .map_err(DirectoryError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::ExternalService(format!(
                "Failed to fetch company overview for {}: HTTP {}",
                symbol, status
            )));
        }

        response.text().map_err(DirectoryError::Network)
    }
}

impl OverviewSource for AlphaVantageClient {
    fn overview(&self, symbol: &str) -> Result<Option<CompanyOverview>> {
        let body = self.fetch_overview_body(symbol)?;
        parse_overview(&body)
    }
}

impl fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}
