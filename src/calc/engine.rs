//! Interest engine: validation and interest/total computation

use super::input::{CalculationInput, Compounding, InterestType, MONTHS_PER_YEAR};
use super::result::{to_money, CalculationResult};
use crate::error::{ComputationError, ValidationError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Inclusive bounds on the entered rate percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBounds {
    #[serde(default = "default_min_rate")]
    pub min: f64,
    #[serde(default = "default_max_rate")]
    pub max: f64,
}

fn default_min_rate() -> f64 {
    RateBounds::STANDARD.min
}

fn default_max_rate() -> f64 {
    RateBounds::STANDARD.max
}

/// Default cap on series periods: 1000 years of monthly periods
pub const DEFAULT_MAX_PERIODS: u32 = 12_000;

/// Slack applied before taking the ceiling of a period count, so that float
/// noise like 12.000000000000002 does not add a period
const PERIOD_EPSILON: f64 = 1e-9;

impl RateBounds {
    /// Whole-percent form: 1% to 50%
    pub const STANDARD: RateBounds = RateBounds { min: 1.0, max: 50.0 };

    /// Fine-grained form: 0.1% to 50%
    pub const FINE: RateBounds = RateBounds { min: 0.1, max: 50.0 };

    /// Create bounds from an inclusive min and max
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if a rate lies within the bounds
    pub fn contains(&self, rate: f64) -> bool {
        rate.is_finite() && rate >= self.min && rate <= self.max
    }

    /// Pin a manually entered rate into bounds. Unparseable input becomes `min`.
    pub fn clamp(&self, rate: f64) -> f64 {
        if rate.is_nan() || rate < self.min {
            self.min
        } else if rate > self.max {
            self.max
        } else {
            rate
        }
    }
}

impl Default for RateBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Render a rate with one fractional digit, e.g. `7.5%`
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.1}%")
}

/// Per-period rate and number of periods derived from the compounding option
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBasis {
    /// Fractional rate per period (0.01 = 1%)
    pub rate_per_period: f64,
    /// Number of periods, possibly fractional
    pub periods: f64,
}

impl RateBasis {
    /// Basis for the input's own compounding option
    pub fn for_input(input: &CalculationInput) -> Self {
        Self::new(input, input.compounding)
    }

    /// Basis for an explicit compounding option
    pub fn new(input: &CalculationInput, compounding: Compounding) -> Self {
        let years = input.time.normalized_years();
        match compounding {
            Compounding::Annual => Self {
                rate_per_period: input.rate_percent / 100.0,
                periods: years,
            },
            Compounding::Monthly => Self {
                rate_per_period: input.rate_percent / 1200.0,
                periods: years * MONTHS_PER_YEAR,
            },
            Compounding::PerUnit => Self {
                rate_per_period: input.rate_percent / 100.0,
                periods: years * MONTHS_PER_YEAR,
            },
        }
    }

    /// Number of whole periods started, ceil(periods). Zero for an empty span.
    pub fn whole_periods(&self) -> f64 {
        if self.periods.is_nan() || self.periods <= 0.0 {
            return 0.0;
        }
        (self.periods - PERIOD_EPSILON).ceil().max(0.0)
    }

    /// Amount after `periods` periods (the final count, or any prefix of it)
    pub fn accrued_total(&self, principal: f64, periods: f64, interest_type: InterestType) -> f64 {
        match interest_type {
            InterestType::Simple => principal + principal * self.rate_per_period * periods,
            InterestType::Compound => principal * (1.0 + self.rate_per_period).powf(periods),
        }
    }
}

/// Stateless interest engine configured with rate bounds and a period cap
#[derive(Debug, Clone, Copy)]
pub struct InterestEngine {
    bounds: RateBounds,
    max_periods: u32,
}

impl Default for InterestEngine {
    fn default() -> Self {
        Self::new(RateBounds::default())
    }
}

impl InterestEngine {
    /// Create an engine with the given rate bounds and the default period cap
    pub fn new(bounds: RateBounds) -> Self {
        Self {
            bounds,
            max_periods: DEFAULT_MAX_PERIODS,
        }
    }

    /// Set the largest number of series periods an input may span
    pub fn with_max_periods(mut self, max_periods: u32) -> Self {
        self.max_periods = max_periods;
        self
    }

    /// Rate bounds enforced by `validate`
    pub fn bounds(&self) -> RateBounds {
        self.bounds
    }

    /// Period cap enforced by `validate`
    pub fn max_periods(&self) -> u32 {
        self.max_periods
    }

    /// Check an input against the engine's bounds
    pub fn validate(&self, input: &CalculationInput) -> Result<(), ValidationError> {
        if !input.principal.is_finite() || input.principal <= 0.0 {
            return Err(ValidationError::InvalidPrincipal { principal: input.principal });
        }
        if !self.bounds.contains(input.rate_percent) {
            return Err(ValidationError::RateOutOfBounds {
                rate: input.rate_percent,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        for (field, value) in input.time.components() {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::NegativeTime { field, value });
            }
        }
        if input.time.normalized_years() <= 0.0 {
            return Err(ValidationError::EmptyTimePeriod);
        }
        let periods = RateBasis::for_input(input).whole_periods();
        if periods > f64::from(self.max_periods) {
            return Err(ValidationError::TooManyPeriods {
                periods,
                max: self.max_periods,
            });
        }
        Ok(())
    }

    /// Validate and compute interest and total, rounded to cents.
    ///
    /// Simple interest rounds the interest and adds it to the principal;
    /// compound interest rounds the total and subtracts the principal. Either
    /// way `total == principal + interest` holds exactly. A result that cannot
    /// be represented is reported as 0.00 / 0.00.
    pub fn compute(&self, input: &CalculationInput) -> Result<CalculationResult, ValidationError> {
        self.validate(input)?;

        let result = match Self::compute_unchecked(input) {
            Ok(result) => result,
            Err(e) => {
                warn!("Degenerate calculation for {:?}: {}", input, e);
                CalculationResult::degenerate()
            }
        };

        debug!(
            "{} {} on {} at {}% over {:.4}y: interest={}, total={}",
            input.interest_type,
            input.compounding,
            input.principal,
            input.rate_percent,
            input.time.normalized_years(),
            result.interest,
            result.total
        );
        Ok(result)
    }

    fn compute_unchecked(input: &CalculationInput) -> Result<CalculationResult, ComputationError> {
        let basis = RateBasis::for_input(input);
        let principal = to_money(input.principal)?;

        match input.interest_type {
            InterestType::Simple => {
                let interest = input.principal * basis.rate_per_period * basis.periods;
                Ok(CalculationResult::from_interest(principal, to_money(interest)?))
            }
            InterestType::Compound => {
                let total =
                    basis.accrued_total(input.principal, basis.periods, InterestType::Compound);
                Ok(CalculationResult::from_total(principal, to_money(total)?))
            }
        }
    }
}
