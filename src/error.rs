//! Error types shared across the crate

use thiserror::Error;

/// Rejected input. The calculation is aborted and nothing is written to history.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid positive principal amount.")]
    InvalidPrincipal { principal: f64 },

    #[error("Please enter a valid interest rate between {min} and {max}%.")]
    RateOutOfBounds { rate: f64, min: f64, max: f64 },

    #[error("Time period {field} must be a non-negative number.")]
    NegativeTime { field: &'static str, value: f64 },

    #[error("Please enter at least one valid time period (years, months, or days).")]
    EmptyTimePeriod,

    #[error("Time period spans {periods} periods; the limit is {max}.")]
    TooManyPeriods { periods: f64, max: u32 },
}

/// A value that cannot be represented as money. Recovered inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ComputationError {
    #[error("non-finite value {0}")]
    NonFinite(f64),

    #[error("value {0} is outside the representable decimal range")]
    Unrepresentable(f64),
}

/// Failure of the persistence collaborator
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid rate bounds: min {min} must not exceed max {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("maxPeriods must be at least 1")]
    InvalidMaxPeriods,
}

/// Error returned by [`crate::Calculator`]
#[derive(Debug, Error)]
pub enum CalcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("history store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T, E = CalcError> = std::result::Result<T, E>;
