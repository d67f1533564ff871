//! Calculation result and money rounding

use crate::error::ComputationError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Fractional digits kept for money amounts
pub const MONEY_SCALE: u32 = 2;

/// Round a float amount to cents.
///
/// Uses the exact binary value of `value`, so 1.005 rounds to 1.00 the same
/// way a fixed-point formatter would render it.
pub fn to_money(value: f64) -> Result<Decimal, ComputationError> {
    if !value.is_finite() {
        return Err(ComputationError::NonFinite(value));
    }
    let exact =
        Decimal::from_f64_retain(value).ok_or(ComputationError::Unrepresentable(value))?;
    let mut rounded =
        exact.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    Ok(rounded)
}

/// Interest and total rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Principal on the same cent basis as `interest` and `total`
    pub principal: Decimal,
    pub interest: Decimal,
    pub total: Decimal,
    /// Set only when the computation produced no usable number
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    degenerate: bool,
}

impl CalculationResult {
    /// Build from simple interest: interest is rounded, total is derived
    pub(crate) fn from_interest(principal: Decimal, interest: Decimal) -> Self {
        Self {
            principal,
            interest,
            total: principal + interest,
            degenerate: false,
        }
    }

    /// Build from compound growth: total is rounded, interest is derived
    pub(crate) fn from_total(principal: Decimal, total: Decimal) -> Self {
        Self {
            principal,
            interest: total - principal,
            total,
            degenerate: false,
        }
    }

    /// Result reported when the computation produced no usable number
    pub fn degenerate() -> Self {
        let mut zero = Decimal::ZERO;
        zero.rescale(MONEY_SCALE);
        Self {
            principal: zero,
            interest: zero,
            total: zero,
            degenerate: true,
        }
    }

    /// True when the result was substituted for an unusable computation
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}
