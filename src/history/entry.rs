//! Persisted record of one calculation

use crate::calc::{CalculationInput, CalculationResult, Compounding, InterestType};
use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub principal: f64,
    pub rate_percent: f64,
    pub years: f64,
    pub months: f64,
    pub days: f64,
    pub compounding: Compounding,
    pub interest_type: InterestType,
    pub interest: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        input: &CalculationInput,
        result: &CalculationResult,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            principal: input.principal,
            rate_percent: input.rate_percent,
            years: input.time.years,
            months: input.time.months,
            days: input.time.days,
            compounding: input.compounding,
            interest_type: input.interest_type,
            interest: result.interest,
            total: result.total,
            created_at,
        }
    }

    /// One-line rendering for history lists, timestamp in local time
    pub fn summary_line(&self) -> String {
        let date = self.created_at.with_timezone(&Local).format("%d/%m/%Y, %H:%M:%S");
        format!(
            "{}: ₹{}, {}%, {}y {}m {}d, {}, {}, Interest: ₹{}, Total: ₹{}",
            date,
            self.principal,
            self.rate_percent,
            self.years,
            self.months,
            self.days,
            self.compounding,
            self.interest_type,
            self.interest,
            self.total,
        )
    }
}
