//! Interest engine and growth series generation

mod engine;
mod input;
mod result;
mod series;

pub use engine::{format_rate, InterestEngine, RateBasis, RateBounds, DEFAULT_MAX_PERIODS};
pub use input::{
    CalculationInput, Compounding, InterestType, TimeSpan, DAYS_PER_YEAR, MONTHS_PER_YEAR,
};
pub use result::{to_money, CalculationResult, MONEY_SCALE};
pub use series::{SeriesGenerator, SeriesPoint, SeriesUnit};
