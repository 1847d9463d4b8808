//! Configuration loader and application settings.

use std::str::FromStr;

use crate::errors::{AppError, Result};
use crate::tracer::TransactionBudget;

/// Price series used when `TRACER_PRICES` is unset.
pub const DEMO_PRICES: [i64; 16] = [13, 13, 15, 11, 12, 13, 12, 14, 7, 13, 0, 9, 3, 2, 5, 4];

const DEFAULT_TRANSACTIONS: i64 = 3;

/// How the binary writes the traced series to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            other => Err(AppError::Config(format!(
                "TRACER_OUTPUT must be `json` or `table`, got `{other}`"
            ))),
        }
    }
}

/// Consolidated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Price per time step.
    pub prices: Vec<i64>,
    /// Maximum number of buy/sell pairs.
    pub budget: TransactionBudget,
    pub output: OutputFormat,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let prices = match lookup("TRACER_PRICES") {
            Some(raw) => parse_prices(&raw)?,
            None => DEMO_PRICES.to_vec(),
        };
        let transactions = match lookup("TRACER_TRANSACTIONS") {
            Some(raw) => raw.trim().parse::<i64>()?,
            None => DEFAULT_TRANSACTIONS,
        };
        let budget = TransactionBudget::try_from(transactions)?;
        let output = match lookup("TRACER_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self {
            prices,
            budget,
            output,
        })
    }
}

/// Parse a comma-separated list of integer prices. Blank input is an empty series.
pub fn parse_prices(raw: &str) -> Result<Vec<i64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|p| p.trim().parse::<i64>().map_err(AppError::from))
        .collect()
}
