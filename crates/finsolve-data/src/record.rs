//! Records returned by the directory.

use serde::{Serialize, Serializer};
use std::fmt;

/// Marker written in place of a value that is not available.
pub const NOT_AVAILABLE: &str = "N/A";

/// Marker written in place of a missing company description.
pub const NO_DESCRIPTION: &str = "No information available";

fn or_marker<T, S>(value: &Option<T>, marker: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(marker),
    }
}

/// Serializes `None` as [`NOT_AVAILABLE`] instead of `null`.
pub(crate) mod not_available {
    use serde::{Serialize, Serializer};

    pub(crate) fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        super::or_marker(value, super::NOT_AVAILABLE, serializer)
    }
}

/// Serializes a missing description as [`NO_DESCRIPTION`].
pub(crate) mod no_description {
    use serde::Serializer;

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        super::or_marker(value, super::NO_DESCRIPTION, serializer)
    }
}

/// Where an instrument record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// Bundled or configured local table
    Local,
    /// Synthesized from the remote provider's response
    Remote,
}

/// Unit a market capitalization is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketCapUnit {
    /// Indian rupees, in crores (10 million)
    Crores,
    /// US dollars
    Usd,
}

impl MarketCapUnit {
    /// Suffix used when displaying an amount in this unit.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Crores => "crores",
            Self::Usd => "USD",
        }
    }
}

/// Market capitalization with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketCap {
    /// Amount in `unit`
    pub amount: f64,
    /// Unit of `amount`
    pub unit: MarketCapUnit,
}

impl MarketCap {
    /// Create a market cap.
    pub const fn new(amount: f64, unit: MarketCapUnit) -> Self {
        Self { amount, unit }
    }
}

impl fmt::Display for MarketCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole units, truncated toward zero
        write!(f, "{:.0} {}", self.amount.trunc(), self.unit.suffix())
    }
}

impl Serialize for MarketCap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Metadata and headline ratios for one listed company.
///
/// Every `None` is an explicit "not available" and serializes as `"N/A"`,
/// except a missing `about`, which serializes as [`NO_DESCRIPTION`].
/// Ratios (`roce`, `roe`) are percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentRecord {
    /// Ticker symbol
    pub symbol: String,
    /// Company name
    #[serde(serialize_with = "not_available::serialize")]
    pub company: Option<String>,
    /// Market capitalization
    #[serde(serialize_with = "not_available::serialize")]
    pub market_cap: Option<MarketCap>,
    /// Business description
    #[serde(serialize_with = "no_description::serialize")]
    pub about: Option<String>,
    /// Current market price
    #[serde(serialize_with = "not_available::serialize")]
    pub current_price: Option<f64>,
    /// Price-to-earnings ratio
    #[serde(serialize_with = "not_available::serialize")]
    pub pe_ratio: Option<f64>,
    /// Book value per share
    #[serde(serialize_with = "not_available::serialize")]
    pub book_value: Option<f64>,
    /// Dividend per share
    #[serde(serialize_with = "not_available::serialize")]
    pub dividend: Option<f64>,
    /// Return on capital employed (%)
    #[serde(serialize_with = "not_available::serialize")]
    pub roce: Option<f64>,
    /// Return on equity (%)
    #[serde(serialize_with = "not_available::serialize")]
    pub roe: Option<f64>,
    /// Face (par) value per share
    #[serde(serialize_with = "not_available::serialize")]
    pub face_value: Option<f64>,
    /// Where the record came from
    pub source: RecordSource,
}

impl InstrumentRecord {
    /// Number of fields that are not available.
    pub fn missing_fields(&self) -> usize {
        [
            self.company.is_none(),
            self.market_cap.is_none(),
            self.about.is_none(),
            self.current_price.is_none(),
            self.pe_ratio.is_none(),
            self.book_value.is_none(),
            self.dividend.is_none(),
            self.roce.is_none(),
            self.roe.is_none(),
            self.face_value.is_none(),
        ]
        .into_iter()
        .filter(|missing| *missing)
        .count()
    }
}

/// Region and description of a market index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDescription {
    /// Index name
    pub index: String,
    /// Exchange or region the index belongs to
    #[serde(serialize_with = "not_available::serialize")]
    pub region: Option<String>,
    /// Free-text description
    #[serde(serialize_with = "not_available::serialize")]
    pub description: Option<String>,
}
