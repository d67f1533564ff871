//! Calculation inputs: principal, rate, time span and the enumerated options

use serde::{Deserialize, Serialize};
use std::fmt;

/// Days per year used when normalizing a time span (no calendar logic)
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Months per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// How the entered rate is turned into a per-period rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Compounding {
    /// Annual percentage, one period per year
    #[default]
    Annual,
    /// Annual percentage split into twelve monthly periods (rate / 1200)
    Monthly,
    /// Rate is already stated per month (rate / 100), monthly periods
    PerUnit,
}

impl Compounding {
    /// True when periods are counted in months
    pub fn is_monthly(&self) -> bool {
        matches!(self, Compounding::Monthly | Compounding::PerUnit)
    }

    /// Name used in history lines and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            Compounding::Annual => "annual",
            Compounding::Monthly => "monthly",
            Compounding::PerUnit => "per-unit",
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterestType {
    Simple,
    #[default]
    Compound,
}

impl InterestType {
    /// Name used in history lines and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestType::Simple => "simple",
            InterestType::Compound => "compound",
        }
    }
}

impl fmt::Display for InterestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time period split the way it is entered: years, months and days
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSpan {
    #[serde(default)]
    pub years: f64,
    #[serde(default)]
    pub months: f64,
    #[serde(default)]
    pub days: f64,
}

impl TimeSpan {
    pub fn new(years: f64, months: f64, days: f64) -> Self {
        Self { years, months, days }
    }

    pub fn years(years: f64) -> Self {
        Self::new(years, 0.0, 0.0)
    }

    /// Total length in years: years + months/12 + days/365
    pub fn normalized_years(&self) -> f64 {
        self.years + self.months / MONTHS_PER_YEAR + self.days / DAYS_PER_YEAR
    }

    /// Total length in months
    pub fn normalized_months(&self) -> f64 {
        self.normalized_years() * MONTHS_PER_YEAR
    }

    /// Components in entry order, used for validation messages
    pub(crate) fn components(&self) -> [(&'static str, f64); 3] {
        [("years", self.years), ("months", self.months), ("days", self.days)]
    }
}

/// One calculation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    pub principal: f64,
    /// Rate in percent (10.0 = 10%)
    pub rate_percent: f64,
    #[serde(flatten)]
    pub time: TimeSpan,
    #[serde(default)]
    pub compounding: Compounding,
    #[serde(default)]
    pub interest_type: InterestType,
}

impl CalculationInput {
    pub fn new(principal: f64, rate_percent: f64, time: TimeSpan) -> Self {
        Self {
            principal,
            rate_percent,
            time,
            compounding: Compounding::default(),
            interest_type: InterestType::default(),
        }
    }

    pub fn with_compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }

    pub fn with_interest_type(mut self, interest_type: InterestType) -> Self {
        self.interest_type = interest_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalized_time() {
        let span = TimeSpan::new(1.0, 6.0, 0.0);
        assert_relative_eq!(span.normalized_years(), 1.5);
        assert_relative_eq!(span.normalized_months(), 18.0);

        let days = TimeSpan::new(0.0, 0.0, 73.0);
        assert_relative_eq!(days.normalized_years(), 0.2);
    }

    #[test]
    fn test_monthly_flags() {
        assert!(!Compounding::Annual.is_monthly());
        assert!(Compounding::Monthly.is_monthly());
        assert!(Compounding::PerUnit.is_monthly());
    }

    #[test]
    fn test_input_json_shape() {
        let input = CalculationInput::new(1000.0, 5.0, TimeSpan::new(2.0, 3.0, 0.0))
            .with_compounding(Compounding::Monthly)
            .with_interest_type(InterestType::Simple);
        let json = serde_json::to_value(input).unwrap();

        assert_eq!(json["ratePercent"], 5.0);
        assert_eq!(json["years"], 2.0);
        assert_eq!(json["months"], 3.0);
        assert_eq!(json["compounding"], "monthly");
        assert_eq!(json["interestType"], "simple");
    }
}
