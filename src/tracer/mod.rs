//! Max-profit solver for at most K buy/sell pairs, with per-step DP traces.

pub mod solver;
pub mod state;
pub mod types;

pub use solver::{max_profit, trace_max_profit};
pub use state::{DpSlot, DpState};
pub use types::{Price, SeriesRole, Trace, TracedProfit, TransactionBudget};
