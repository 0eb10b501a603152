//! Compounding rules of thumb
//!
//! Estimate how long an investment takes to grow by a fixed multiple at a
//! given annual rate of return, expressed as a percentage (8 means 8%).

pub mod doubling;
pub mod tripling;

pub use doubling::years_to_double;
pub use tripling::years_to_triple;
