//! Instrument table: one row of metadata per listed company.

use crate::error::{DirectoryError, Result};
use crate::record::{InstrumentRecord, MarketCap, MarketCapUnit, RecordSource};
use crate::tables::{finite, text};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Instrument table shipped with the crate.
const BUNDLED_INSTRUMENTS: &str = include_str!("../../data/instruments.csv");

/// Column holding the unique key.
pub const SYMBOL_COLUMN: &str = "symbol";

/// Column holding the company name.
pub const NAME_COLUMN: &str = "name";

/// One CSV row. Columns other than `symbol` and `name` may be absent.
#[derive(Debug, Deserialize)]
struct InstrumentRow {
    symbol: String,
    name: Option<String>,
    #[serde(default)]
    market_cap: Option<f64>,
    #[serde(default)]
    about: Option<String>,
    #[serde(default)]
    current_price: Option<f64>,
    #[serde(default)]
    pe_ratio: Option<f64>,
    #[serde(default)]
    book_value: Option<f64>,
    #[serde(default)]
    dividend: Option<f64>,
    #[serde(default)]
    roce: Option<f64>,
    #[serde(default)]
    roe: Option<f64>,
    #[serde(default)]
    face_value: Option<f64>,
}

impl InstrumentRow {
    fn into_record(self) -> InstrumentRecord {
        InstrumentRecord {
            symbol: self.symbol,
            company: text(self.name),
            market_cap: finite(self.market_cap).map(|c| MarketCap::new(c, MarketCapUnit::Crores)),
            about: text(self.about),
            current_price: finite(self.current_price),
            pe_ratio: finite(self.pe_ratio),
            book_value: finite(self.book_value),
            dividend: finite(self.dividend),
            roce: finite(self.roce),
            roe: finite(self.roe),
            face_value: finite(self.face_value),
            source: RecordSource::Local,
        }
    }
}

/// Instruments keyed by symbol, in file order.
#[derive(Debug, Clone, Default)]
pub struct InstrumentTable {
    records: Vec<InstrumentRecord>,
    by_symbol: HashMap<String, usize>,
}

impl InstrumentTable {
    /// Load the table bundled with this crate.
    pub fn bundled() -> Result<Self> {
        Self::from_reader(BUNDLED_INSTRUMENTS.as_bytes())
    }

    /// Load a table from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading instrument table");
        Self::from_reader(File::open(path)?)
    }

    /// Load a table from CSV data with a header row.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::Schema`] when the `symbol` or `name` column is
    /// missing, [`DirectoryError::Csv`] for malformed rows.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in [SYMBOL_COLUMN, NAME_COLUMN] {
            if !headers.iter().any(|h| h == column) {
                return Err(DirectoryError::Schema(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for row in reader.deserialize::<InstrumentRow>() {
            records.push(row?.into_record());
        }

        Ok(Self::from_records(records))
    }

    /// Build a table from records, skipping blank and repeated symbols.
    pub fn from_records(records: impl IntoIterator<Item = InstrumentRecord>) -> Self {
        let mut table = Self::default();
        for record in records {
            if record.symbol.is_empty() {
                tracing::warn!("skipping instrument row without a symbol");
                continue;
            }
            if table.by_symbol.contains_key(&record.symbol) {
                tracing::warn!(symbol = %record.symbol, "skipping duplicate instrument row");
                continue;
            }
            table
                .by_symbol
                .insert(record.symbol.clone(), table.records.len());
            table.records.push(record);
        }
        tracing::debug!(rows = table.records.len(), "instrument table loaded");
        table
    }

    /// Get the record for an exact symbol.
    pub fn get(&self, symbol: &str) -> Option<&InstrumentRecord> {
        self.by_symbol.get(symbol).map(|&i| &self.records[i])
    }

    /// Number of instruments.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no instruments.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table() {
        let table = InstrumentTable::bundled().unwrap();
        assert!(table.len() >= 20);
        assert!(table.records.iter().all(|r| table.get(&r.symbol) == Some(r)));

        let tcs = table.get("TCS").unwrap();
        assert_eq!(tcs.company.as_deref(), Some("Tata Consultancy Services Ltd"));
        assert_eq!(
            tcs.market_cap,
            Some(MarketCap::new(1_412_000.0, MarketCapUnit::Crores))
        );
        assert_eq!(tcs.face_value, Some(1.0));
        assert_eq!(tcs.source, RecordSource::Local);
    }

    #[test]
    fn test_blank_cells_are_not_available() {
        let table = InstrumentTable::bundled().unwrap();

        let zomato = table.get("ZOMATO").unwrap();
        assert_eq!(zomato.company.as_deref(), Some("Zomato Ltd"));
        assert_eq!(zomato.missing_fields(), 9);

        let adani = table.get("ADANIENT").unwrap();
        assert!(adani.market_cap.is_none());
        assert!(adani.pe_ratio.is_none());
        assert_eq!(adani.dividend, Some(0.04));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = InstrumentTable::bundled().unwrap();
        assert!(table.get("INFY").is_some());
        assert!(table.get("infy").is_none());
        assert!(table.get(" INFY").is_none());
    }

    #[test]
    fn test_missing_optional_columns() {
        let csv = "symbol,name,pe_ratio\nABC,Abc Corp,12.5\nXYZ,Xyz Corp,\n";
        let table = InstrumentTable::from_reader(csv.as_bytes()).unwrap();

        let abc = table.get("ABC").unwrap();
        assert_eq!(abc.pe_ratio, Some(12.5));
        assert!(abc.market_cap.is_none());
        assert!(abc.face_value.is_none());
        assert!(table.get("XYZ").unwrap().pe_ratio.is_none());
    }

    #[test]
    fn test_missing_key_column() {
        let csv = "ticker,name\nABC,Abc Corp\n";
        let err = InstrumentTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DirectoryError::Schema(ref c) if c == "symbol"));
    }

    #[test]
    fn test_duplicates_keep_first_row() {
        let csv = "symbol,name\nABC,First\nABC,Second\n,Nameless\n";
        let table = InstrumentTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("ABC").unwrap().company.as_deref(), Some("First"));
    }

    #[test]
    fn test_non_numeric_cell_is_an_error() {
        let csv = "symbol,name,pe_ratio\nABC,Abc Corp,twelve\n";
        assert!(matches!(
            InstrumentTable::from_reader(csv.as_bytes()),
            Err(DirectoryError::Csv(_))
        ));
    }

    #[test]
    fn test_nan_cell_is_not_available() {
        let csv = "symbol,name,roe\nABC,Abc Corp,NaN\n";
        let table = InstrumentTable::from_reader(csv.as_bytes()).unwrap();
        assert!(table.get("ABC").unwrap().roe.is_none());
    }
}
