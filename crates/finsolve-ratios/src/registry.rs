//! Ratio Registry
//!
//! Central registry for all available ratios. Allows dynamic lookup and
//! evaluation by name, which is how the command-line front end reaches them.

use crate::error::{RatioError, Result};
use crate::{compounding, dividend, earnings, quality, value};
use serde::Serialize;
use std::fmt;

/// Available ratio categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioCategory {
    /// Compounding rules of thumb (Rule of 72, Rule of 114)
    Compounding,
    /// Earnings ratios (EPS, P/E)
    Earnings,
    /// Quality ratios (ROE, ROCE, debt-to-equity)
    Quality,
    /// Dividend ratios (yield percentage, yield amount)
    Dividend,
    /// Value ratios (price-to-book)
    Value,
}

impl RatioCategory {
    /// Returns all categories.
    pub const fn all() -> [Self; 5] {
        [
            Self::Compounding,
            Self::Earnings,
            Self::Quality,
            Self::Dividend,
            Self::Value,
        ]
    }

    /// Returns the lowercase category name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Compounding => "compounding",
            Self::Earnings => "earnings",
            Self::Quality => "quality",
            Self::Dividend => "dividend",
            Self::Value => "value",
        }
    }

    /// Parses a category from its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for RatioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a ratio's result measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioUnit {
    /// Number of years
    Years,
    /// Currency amount per share
    PerShare,
    /// Plain multiple (price over something)
    Multiple,
    /// Percentage (already multiplied by 100)
    Percent,
}

/// Ratio metadata
#[derive(Debug, Clone, Serialize)]
pub struct RatioInfo {
    /// Ratio name (unique identifier)
    pub name: &'static str,
    /// Ratio category
    pub category: RatioCategory,
    /// Brief description of what the ratio measures
    pub description: &'static str,
    /// Argument names, in call order
    pub inputs: &'static [&'static str],
    /// Unit of the result
    pub unit: RatioUnit,
}

/// Get all available ratio info
pub fn available_ratios() -> Vec<RatioInfo> {
    vec![
        // Compounding
        RatioInfo {
            name: "years_to_double",
            category: RatioCategory::Compounding,
            description: "Years to double an investment (Rule of 72)",
            inputs: &["interest"],
            unit: RatioUnit::Years,
        },
        RatioInfo {
            name: "years_to_triple",
            category: RatioCategory::Compounding,
            description: "Years to triple an investment (Rule of 114)",
            inputs: &["interest"],
            unit: RatioUnit::Years,
        },
        // Earnings
        RatioInfo {
            name: "earnings_per_share",
            category: RatioCategory::Earnings,
            description: "Earnings available to each outstanding share",
            inputs: &["earnings", "no_of_shares"],
            unit: RatioUnit::PerShare,
        },
        RatioInfo {
            name: "price_to_earnings",
            category: RatioCategory::Earnings,
            description: "Share price relative to earnings per share",
            inputs: &["earnings", "no_of_shares", "current_market_price"],
            unit: RatioUnit::Multiple,
        },
        // Quality
        RatioInfo {
            name: "return_on_equity",
            category: RatioCategory::Quality,
            description: "Net income as a percentage of shareholders' equity",
            inputs: &["net_income", "shareholders_equity"],
            unit: RatioUnit::Percent,
        },
        RatioInfo {
            name: "return_on_capital_employed",
            category: RatioCategory::Quality,
            description: "EBIT as a percentage of capital employed",
            inputs: &["ebit", "capital_employed"],
            unit: RatioUnit::Percent,
        },
        RatioInfo {
            name: "debt_to_equity",
            category: RatioCategory::Quality,
            description: "Total debt as a percentage of shareholders' equity",
            inputs: &["total_debt", "shareholders_equity"],
            unit: RatioUnit::Percent,
        },
        // Dividend
        RatioInfo {
            name: "dividend_yield_percentage",
            category: RatioCategory::Dividend,
            description: "Annual dividend as a percentage of the share price",
            inputs: &["annual_dividend", "price_per_share"],
            unit: RatioUnit::Percent,
        },
        RatioInfo {
            name: "dividend_yield",
            category: RatioCategory::Dividend,
            description: "Dividend amount implied by a yield percentage",
            inputs: &["dividend_yield_percentage", "price_per_share"],
            unit: RatioUnit::PerShare,
        },
        // Value
        RatioInfo {
            name: "price_to_book",
            category: RatioCategory::Value,
            description: "Market price relative to book value per share",
            inputs: &["market_price", "book_value_per_share"],
            unit: RatioUnit::Multiple,
        },
    ]
}

/// Get ratios by category
pub fn ratios_by_category(category: RatioCategory) -> Vec<RatioInfo> {
    available_ratios()
        .into_iter()
        .filter(|r| r.category == category)
        .collect()
}

/// Get ratio info by name
pub fn get_ratio_info(name: &str) -> Option<RatioInfo> {
    available_ratios().into_iter().find(|r| r.name == name)
}

/// Evaluate a ratio by registry name with positional inputs.
///
/// Inputs follow the order listed in [`RatioInfo::inputs`]. A share count must
/// be a non-negative whole number.
///
/// # Errors
///
/// [`RatioError::UnknownRatio`] for an unregistered name,
/// [`RatioError::Arity`] for the wrong number of inputs, and whatever the ratio
/// itself rejects.
///
/// # Example
/// ```
/// use finsolve_ratios::evaluate;
///
/// assert_eq!(evaluate("price_to_earnings", &[50.0, 10.0, 25.0]).unwrap(), 5.0);
/// ```
pub fn evaluate(name: &str, inputs: &[f64]) -> Result<f64> {
    let info = get_ratio_info(name).ok_or_else(|| RatioError::UnknownRatio(name.to_string()))?;
    if inputs.len() != info.inputs.len() {
        return Err(RatioError::Arity {
            ratio: info.name,
            expected: info.inputs.len(),
            actual: inputs.len(),
        });
    }

    match (info.name, inputs) {
        ("years_to_double", &[rate]) => compounding::years_to_double(rate),
        ("years_to_triple", &[rate]) => compounding::years_to_triple(rate),
        ("earnings_per_share", &[e, n]) => {
            earnings::earnings_per_share(e, whole_shares("no_of_shares", n)?)
        }
        ("price_to_earnings", &[e, n, p]) => {
            earnings::price_to_earnings(e, whole_shares("no_of_shares", n)?, p)
        }
        ("return_on_equity", &[i, eq]) => quality::return_on_equity(i, eq),
        ("return_on_capital_employed", &[e, c]) => quality::return_on_capital_employed(e, c),
        ("debt_to_equity", &[d, eq]) => quality::debt_to_equity(d, eq),
        ("dividend_yield_percentage", &[d, p]) => dividend::dividend_yield_percentage(d, p),
        ("dividend_yield", &[y, p]) => dividend::dividend_yield(y, p),
        ("price_to_book", &[p, b]) => value::price_to_book(p, b),
        _ => Err(RatioError::UnknownRatio(name.to_string())),
    }
}

fn whole_shares(argument: &'static str, value: f64) -> Result<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(RatioError::InvalidArgument {
            argument,
            reason: "should be a whole number",
        })
    }
}
