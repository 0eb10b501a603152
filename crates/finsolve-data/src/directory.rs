//! Instrument directory: local tables first, remote provider second.

use crate::alphavantage::{AlphaVantageClient, CompanyOverview, OverviewSource};
use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use crate::record::{IndexDescription, InstrumentRecord};
use crate::tables::{IndexTable, InstrumentTable};
use std::fmt;

/// Looks up listed companies and market indices.
///
/// Tables are immutable after construction, so a directory can be shared
/// between threads without locking. Every operation returns a [`Result`];
/// nothing here panics on bad input or provider failure.
pub struct InstrumentDirectory {
    instruments: InstrumentTable,
    indices: IndexTable,
    source: Option<Box<dyn OverviewSource>>,
}

impl InstrumentDirectory {
    /// Load tables and build the Alpha Vantage client described by `config`.
    ///
    /// # Errors
    ///
    /// Fails when a configured table cannot be read or lacks its key column.
    /// A missing API key is not an error until a remote lookup is needed.
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        let instruments = match &config.instruments_path {
            Some(path) => InstrumentTable::from_path(path)?,
            None => InstrumentTable::bundled()?,
        };
        let indices = match &config.indices_path {
            Some(path) => IndexTable::from_path(path)?,
            None => IndexTable::bundled()?,
        };
        if !config.provider.has_api_key() {
            tracing::warn!("no API key configured; remote lookups will fail");
        }
        let client = AlphaVantageClient::new(&config.provider)?;

        Ok(Self::from_parts(instruments, indices, client))
    }

    /// Assemble a directory from loaded tables and a remote source.
    pub fn from_parts(
        instruments: InstrumentTable,
        indices: IndexTable,
        source: impl OverviewSource + 'static,
    ) -> Self {
        Self {
            instruments,
            indices,
            source: Some(Box::new(source)),
        }
    }

    /// A directory without a remote provider; local misses are not found.
    pub fn offline(instruments: InstrumentTable, indices: IndexTable) -> Self {
        Self {
            instruments,
            indices,
            source: None,
        }
    }

    /// Full record for `symbol`, from the local table or the remote provider.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::InvalidArgument`] for a blank symbol
    /// - [`DirectoryError::SymbolNotFound`] when neither source knows it
    /// - an external-service error when the provider cannot be reached or
    ///   answers with a failure
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn lookup_instrument(&self, symbol: &str) -> Result<InstrumentRecord> {
        require_name("symbol", symbol)?;

        if let Some(record) = self.instruments.get(symbol) {
            return Ok(record.clone());
        }

        tracing::debug!("symbol not in local table, asking remote provider");
        match self.remote_overview(symbol)? {
            Some(overview) => {
                let record = overview.into_record(symbol);
                let missing = record.missing_fields();
                if missing > 0 {
                    tracing::debug!(missing, "remote record is incomplete");
                }
                Ok(record)
            }
            None => Err(DirectoryError::SymbolNotFound(symbol.to_string())),
        }
    }

    /// Every index name, in table order.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::Schema`] when the index table lacks its key column.
    pub fn list_indices(&self) -> Result<Vec<String>> {
        self.indices.names()
    }

    /// Region and description of an index.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::InvalidArgument`] for a blank name,
    /// [`DirectoryError::IndexNotFound`] for an unknown one and
    /// [`DirectoryError::Schema`] when the table lacks a needed column.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn describe_index(&self, name: &str) -> Result<IndexDescription> {
        require_name("index", name)?;
        self.indices.describe(name)
    }

    /// Whether `symbol` is known locally or to the remote provider.
    ///
    /// Provider failures are reported as errors, never as `false`.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn is_valid_symbol(&self, symbol: &str) -> Result<bool> {
        require_name("symbol", symbol)?;

        if self.instruments.get(symbol).is_some() {
            return Ok(true);
        }
        Ok(self.remote_overview(symbol)?.is_some())
    }

    /// Whether `name` is an index in the local table.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::InvalidArgument`] for a blank name,
    /// [`DirectoryError::Schema`] when the table lacks its key column.
    pub fn is_valid_index(&self, name: &str) -> Result<bool> {
        require_name("index", name)?;
        self.indices.require_key_column()?;
        Ok(self.indices.get(name).is_some())
    }

    fn remote_overview(&self, symbol: &str) -> Result<Option<CompanyOverview>> {
        let Some(source) = &self.source else {
            return Ok(None);
        };
        source.overview(symbol).inspect_err(|e| {
            tracing::warn!(symbol, error = %e, "remote overview lookup failed");
        })
    }
}

impl fmt::Debug for InstrumentDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentDirectory")
            .field("instruments", &self.instruments.len())
            .field("indices", &self.indices.len())
            .field("source", &self.source)
            .finish()
    }
}

fn require_name(argument: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::InvalidArgument(format!(
            "The provided {} must be a non-empty string.",
            argument
        )));
    }
    Ok(())
}
