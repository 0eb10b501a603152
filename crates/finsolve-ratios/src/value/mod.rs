//! Value ratios - what the market pays for a company's net assets

pub mod price_to_book;

pub use price_to_book::price_to_book;
