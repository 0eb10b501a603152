//! Company overview payload and its mapping onto [`InstrumentRecord`].

use crate::error::{DirectoryError, Result};
use crate::record::{InstrumentRecord, MarketCap, MarketCapUnit, RecordSource};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keys Alpha Vantage uses for quota, key and usage messages.
const MESSAGE_KEYS: [&str; 3] = ["Error Message", "Information", "Note"];

/// Placeholders the provider uses for a missing value.
const PLACEHOLDERS: [&str; 3] = ["None", "-", "N/A"];

/// Fields of the `OVERVIEW` response used by this crate.
///
/// Alpha Vantage reports numbers as strings; every field is kept raw and parsed
/// on demand so a single odd value never fails the whole lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompanyOverview {
    /// Ticker symbol
    #[serde(rename = "Symbol", deserialize_with = "lenient")]
    pub symbol: Option<String>,
    /// Company name
    #[serde(rename = "Name", deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Business description
    #[serde(rename = "Description", deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Listing exchange
    #[serde(rename = "Exchange", deserialize_with = "lenient")]
    pub exchange: Option<String>,
    /// Market capitalization in USD
    #[serde(rename = "MarketCapitalization", deserialize_with = "lenient")]
    pub market_capitalization: Option<String>,
    /// EBITDA
    #[serde(rename = "EBITDA", deserialize_with = "lenient")]
    pub ebitda: Option<String>,
    /// Price to earnings ratio
    #[serde(rename = "PERatio", deserialize_with = "lenient")]
    pub pe_ratio: Option<String>,
    /// Earnings per share
    #[serde(rename = "EPS", deserialize_with = "lenient")]
    pub eps: Option<String>,
    /// Book value per share
    #[serde(rename = "BookValue", deserialize_with = "lenient")]
    pub book_value: Option<String>,
    /// Dividend per share
    #[serde(rename = "DividendPerShare", deserialize_with = "lenient")]
    pub dividend_per_share: Option<String>,
    /// Return on equity, trailing twelve months, as a fraction
    #[serde(rename = "ReturnOnEquityTTM", deserialize_with = "lenient")]
    pub return_on_equity_ttm: Option<String>,
}

/// Accept strings, numbers and null for any field.
fn lenient<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Parse a provider number, mapping placeholders and non-finite values to `None`.
fn number(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() || PLACEHOLDERS.contains(&raw) {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty() && !PLACEHOLDERS.contains(s))
        .map(str::to_string)
}

impl CompanyOverview {
    /// Market capitalization in USD.
    pub fn market_cap(&self) -> Option<f64> {
        number(self.market_capitalization.as_deref())
    }

    /// Current price derived as P/E × EPS.
    pub fn current_price(&self) -> Option<f64> {
        let pe = number(self.pe_ratio.as_deref())?;
        let eps = number(self.eps.as_deref())?;
        Some(pe * eps)
    }

    /// ROCE approximated as EBITDA / market cap × 100.
    pub fn roce(&self) -> Option<f64> {
        let ebitda = number(self.ebitda.as_deref())?;
        let market_cap = self.market_cap().filter(|c| *c != 0.0)?;
        Some(ebitda / market_cap * 100.0)
    }

    /// Return on equity as a percentage.
    pub fn roe(&self) -> Option<f64> {
        number(self.return_on_equity_ttm.as_deref()).map(|r| r * 100.0)
    }

    /// Map onto an instrument record; missing inputs become not available.
    ///
    /// `requested` is used as the symbol when the payload carries none.
    pub fn into_record(self, requested: &str) -> InstrumentRecord {
        InstrumentRecord {
            symbol: text(self.symbol.as_deref()).unwrap_or_else(|| requested.to_string()),
            company: text(self.name.as_deref()),
            market_cap: self
                .market_cap()
                .map(|c| MarketCap::new(c, MarketCapUnit::Usd)),
            about: text(self.description.as_deref()),
            current_price: self.current_price(),
            pe_ratio: number(self.pe_ratio.as_deref()),
            book_value: number(self.book_value.as_deref()),
            dividend: number(self.dividend_per_share.as_deref()),
            roce: self.roce(),
            roe: self.roe(),
            face_value: None,
            source: RecordSource::Remote,
        }
    }
}

/// Decode an `OVERVIEW` response body.
///
/// Returns `Ok(None)` for the provider's "unknown symbol" answers (`{}`,
/// `null` or an empty body).
///
/// # Errors
///
/// [`DirectoryError::ExternalService`] when the payload is only a quota or
/// error message, or is not a JSON object; [`DirectoryError::Serialization`]
/// when the body is not JSON at all.
pub fn parse_overview(body: &str) -> Result<Option<CompanyOverview>> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }

    let map = match serde_json::from_str::<Value>(body)? {
        Value::Null => return Ok(None),
        Value::Object(map) => map,
        other => {
            return Err(DirectoryError::ExternalService(format!(
                "unexpected overview payload: {}",
                other
            )));
        }
    };
    if map.is_empty() {
        return Ok(None);
    }

    if !map.contains_key("Symbol") {
        if let Some(message) = MESSAGE_KEYS
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_str))
        {
            tracing::warn!(message, "provider returned a message instead of data");
            return Err(DirectoryError::ExternalService(message.to_string()));
        }
    }

    Ok(Some(serde_json::from_value(Value::Object(map))?))
}
