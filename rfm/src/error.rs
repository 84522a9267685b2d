use thiserror::Error;

#[derive(Debug, Error)]
pub enum RfmError {
    #[error("At least one rank label is required")]
    NoLabels,
    #[error("Value at row {index} is not finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },
    #[error("Invalid generator range for {field}: [{low}, {high})")]
    InvalidRange {
        field: &'static str,
        low: i64,
        high: i64,
    },
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to format report: {0}")]
    Format(#[from] std::fmt::Error),
}
