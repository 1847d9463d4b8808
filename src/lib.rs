//! Core library for the stock-profit-tracer project.
//!
//! Solves "best time to buy and sell stock with at most K transactions" and
//! records how every DP slot evolves so the buy/sell curves can be charted.

pub mod config;
pub mod dataset;
pub mod errors;
pub mod tracer;
pub mod utils;
