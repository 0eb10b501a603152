//! Index table: names, exchanges and descriptions of market indices.

use crate::error::{DirectoryError, Result};
use crate::record::IndexDescription;
use crate::tables::text;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Index table shipped with the crate.
const BUNDLED_INDICES: &str = include_str!("../../data/indices.csv");

/// Column holding the unique key.
pub const INDEX_COLUMN: &str = "index";

/// Column holding the exchange or region.
pub const EXCHANGE_COLUMN: &str = "exchange";

/// Column holding the description.
pub const DESCRIPTION_COLUMN: &str = "description";

/// One market index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    /// Index name
    pub name: String,
    /// Exchange or region
    pub region: Option<String>,
    /// Free-text description
    pub description: Option<String>,
}

/// Indices keyed by name, in file order.
///
/// Loading never fails on a missing column: operations that need the column
/// report [`DirectoryError::Schema`] instead.
#[derive(Debug, Clone, Default)]
pub struct IndexTable {
    records: Vec<IndexRecord>,
    by_name: HashMap<String, usize>,
    has_index: bool,
    has_exchange: bool,
    has_description: bool,
}

impl IndexTable {
    /// Load the table bundled with this crate.
    pub fn bundled() -> Result<Self> {
        Self::from_reader(BUNDLED_INDICES.as_bytes())
    }

    /// Load a table from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading index table");
        Self::from_reader(File::open(path)?)
    }

    /// Load a table from CSV data with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let position = |column: &str| headers.iter().position(|h| h == column);
        let index_at = position(INDEX_COLUMN);
        let exchange_at = position(EXCHANGE_COLUMN);
        let description_at = position(DESCRIPTION_COLUMN);

        let mut table = Self {
            has_index: index_at.is_some(),
            has_exchange: exchange_at.is_some(),
            has_description: description_at.is_some(),
            ..Self::default()
        };

        let Some(index_at) = index_at else {
            tracing::warn!(column = INDEX_COLUMN, "index table has no key column");
            return Ok(table);
        };

        for row in reader.records() {
            let row = row?;
            let cell = |at: Option<usize>| text(at.and_then(|i| row.get(i)).map(str::to_string));

            let Some(name) = cell(Some(index_at)) else {
                tracing::warn!("skipping index row without a name");
                continue;
            };
            if table.by_name.contains_key(&name) {
                tracing::warn!(index = %name, "skipping duplicate index row");
                continue;
            }
            table.by_name.insert(name.clone(), table.records.len());
            table.records.push(IndexRecord {
                name,
                region: cell(exchange_at),
                description: cell(description_at),
            });
        }

        tracing::debug!(rows = table.records.len(), "index table loaded");
        Ok(table)
    }

    /// Fail with [`DirectoryError::Schema`] unless the key column exists.
    pub fn require_key_column(&self) -> Result<()> {
        if self.has_index {
            Ok(())
        } else {
            Err(DirectoryError::Schema(INDEX_COLUMN.to_string()))
        }
    }

    /// All index names, in file order.
    pub fn names(&self) -> Result<Vec<String>> {
        self.require_key_column()?;
        Ok(self.records.iter().map(|r| r.name.clone()).collect())
    }

    /// Get the record for an exact index name.
    pub fn get(&self, name: &str) -> Option<&IndexRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// Region and description for an exact index name.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::Schema`] when a needed column is missing,
    /// [`DirectoryError::IndexNotFound`] when the name is unknown.
    pub fn describe(&self, name: &str) -> Result<IndexDescription> {
        self.require_key_column()?;
        let record = self
            .get(name)
            .ok_or_else(|| DirectoryError::IndexNotFound(name.to_string()))?;
        for (present, column) in [
            (self.has_exchange, EXCHANGE_COLUMN),
            (self.has_description, DESCRIPTION_COLUMN),
        ] {
            if !present {
                return Err(DirectoryError::Schema(column.to_string()));
            }
        }

        Ok(IndexDescription {
            index: record.name.clone(),
            region: record.region.clone(),
            description: record.description.clone(),
        })
    }

    /// Number of indices.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no indices.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
