//! Quality ratios - profitability and balance-sheet strength
//!
//! ROE and ROCE measure how efficiently a company turns capital into profit;
//! debt-to-equity measures how much of that capital is borrowed. All three are
//! expressed as percentages.

pub mod leverage;
pub mod roce;
pub mod roe;

pub use leverage::debt_to_equity;
pub use roce::return_on_capital_employed;
pub use roe::return_on_equity;
