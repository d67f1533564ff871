//! Simple and compound interest calculator
//!
//! The [`calc`] module holds the pure parts: input validation, the interest
//! engine and the growth series used for charting. [`history`] keeps an
//! append-only log of calculations in a key-value store, and [`Calculator`]
//! ties them together for a single request.

pub mod calc;
pub mod calculator;
pub mod config;
pub mod error;
pub mod export;
pub mod history;

pub use calc::{
    CalculationInput, CalculationResult, Compounding, InterestEngine, InterestType, RateBounds,
    SeriesGenerator, SeriesPoint, SeriesUnit, TimeSpan,
};
pub use calculator::{Calculation, Calculator};
pub use config::AppConfig;
pub use error::{CalcError, ComputationError, ConfigError, ExportError, StoreError, ValidationError};
pub use history::{HistoryEntry, HistoryLog, JsonFileStore, KeyValueStore, MemoryStore};
