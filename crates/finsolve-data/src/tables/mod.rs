//! Static lookup tables.
//!
//! Both tables are loaded once from CSV and never modified afterwards. Keys are
//! matched exactly and case-sensitively; the first row wins when a key repeats.

pub mod indices;
pub mod instruments;

pub use indices::{IndexRecord, IndexTable};
pub use instruments::InstrumentTable;

/// Parse a numeric cell, treating non-finite values as not available.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Trim a text cell, treating blank text as not available.
pub(crate) fn text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_helpers() {
        assert_eq!(finite(Some(f64::NAN)), None);
        assert_eq!(finite(Some(1.5)), Some(1.5));
        assert_eq!(text(Some("   ".to_string())), None);
        assert_eq!(text(Some(" x ".to_string())), Some("x".to_string()));
    }
}
