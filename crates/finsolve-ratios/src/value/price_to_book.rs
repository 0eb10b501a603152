//! Price-to-Book (P/B) Ratio
//!
//! Compares the market price of a share with its book value (net assets per
//! share). Values below one mean the market prices the company below its
//! accounting net worth.

use crate::error::Result;
use crate::validate;

/// Market price divided by book value per share.
///
/// # Errors
///
/// Returns [`RatioError::InvalidArgument`](crate::RatioError::InvalidArgument)
/// when `book_value_per_share` is not positive or `market_price` is not finite.
pub fn price_to_book(market_price: f64, book_value_per_share: f64) -> Result<f64> {
    let price = validate::finite("market_price", market_price)?;
    let book = validate::positive("book_value_per_share", book_value_per_share)?;
    validate::finite_result("price_to_book", price / book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(300.0, 100.0, 3.0)]
    #[case(45.0, 60.0, 0.75)]
    fn test_price_to_book(#[case] price: f64, #[case] book: f64, #[case] expected: f64) {
        assert_relative_eq!(price_to_book(price, book).unwrap(), expected);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-12.0)]
    fn test_non_positive_book_value_rejected(#[case] book: f64) {
        assert_eq!(
            price_to_book(300.0, book).unwrap_err().argument(),
            Some("book_value_per_share")
        );
    }

    #[rstest]
    #[case(1e308, 1e-10)]
    #[case(-1e308, 1e-10)]
    fn test_overflow_rejected(#[case] price: f64, #[case] book: f64) {
        let err = price_to_book(price, book).unwrap_err();
        assert_eq!(
            err,
            crate::RatioError::Overflow {
                ratio: "price_to_book"
            }
        );
    }
}
