use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid transaction budget: {requested} (must be at least 1)")]
    InvalidBudget { requested: i64 },

    #[error("Arithmetic overflow at step {step}, slot {slot}")]
    Overflow { step: usize, slot: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse int error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
