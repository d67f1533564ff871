//! Growth series for charting: cumulative total after each whole period

use super::engine::RateBasis;
use super::input::{CalculationInput, Compounding, InterestType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of the period axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesUnit {
    Year,
    Month,
}

impl SeriesUnit {
    pub fn for_compounding(compounding: Compounding) -> Self {
        if compounding.is_monthly() {
            SeriesUnit::Month
        } else {
            SeriesUnit::Year
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            SeriesUnit::Year => "Year",
            SeriesUnit::Month => "Month",
        }
    }
}

impl fmt::Display for SeriesUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.axis_label())
    }
}

/// One point of the growth curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Whole periods elapsed
    pub period: u32,
    /// Cumulative amount (principal plus accrued interest)
    pub total: f64,
}

/// Generates the per-period series. Does not validate: run the input through
/// [`super::InterestEngine::validate`] first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesGenerator;

impl SeriesGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Series using the input's own interest type and compounding
    pub fn generate(&self, input: &CalculationInput) -> Vec<SeriesPoint> {
        self.generate_with(input, input.interest_type, input.compounding)
    }

    /// Series of length ceil(periods); point `i` is the total after `i` periods.
    ///
    /// The length is not capped here; [`super::InterestEngine::validate`]
    /// rejects spans longer than its period limit.
    pub fn generate_with(
        &self,
        input: &CalculationInput,
        interest_type: InterestType,
        compounding: Compounding,
    ) -> Vec<SeriesPoint> {
        let basis = RateBasis::new(input, compounding);
        let len = basis.whole_periods().min(f64::from(u32::MAX)) as u32;

        (0..len)
            .map(|period| SeriesPoint {
                period,
                total: basis.accrued_total(input.principal, f64::from(period), interest_type),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::input::TimeSpan;
    use approx::assert_relative_eq;

    #[test]
    fn test_annual_series_length() {
        let input = CalculationInput::new(1000.0, 10.0, TimeSpan::years(3.0));
        let series = SeriesGenerator::new().generate(&input);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].period, 0);
        assert_relative_eq!(series[0].total, 1000.0);
        assert_relative_eq!(series[1].total, 1100.0);
        assert_relative_eq!(series[2].total, 1210.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fractional_periods_round_up() {
        let input = CalculationInput::new(1000.0, 10.0, TimeSpan::new(2.0, 6.0, 0.0));
        assert_eq!(SeriesGenerator::new().generate(&input).len(), 3);

        let monthly = input.with_compounding(Compounding::Monthly);
        assert_eq!(SeriesGenerator::new().generate(&monthly).len(), 30);
    }

    #[test]
    fn test_float_noise_does_not_add_period() {
        // 7 months: 7/12 * 12 is not exactly 7 in binary
        let input = CalculationInput::new(1000.0, 10.0, TimeSpan::new(0.0, 7.0, 0.0))
            .with_compounding(Compounding::Monthly);
        assert_eq!(SeriesGenerator::new().generate(&input).len(), 7);
    }

    #[test]
    fn test_simple_monthly_series() {
        let input = CalculationInput::new(1200.0, 12.0, TimeSpan::years(1.0))
            .with_compounding(Compounding::Monthly)
            .with_interest_type(InterestType::Simple);
        let series = SeriesGenerator::new().generate(&input);

        assert_eq!(series.len(), 12);
        for point in &series {
            let expected = 1200.0 + 12.0 * f64::from(point.period);
            assert_relative_eq!(point.total, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_generate_with_overrides_options() {
        let input = CalculationInput::new(1000.0, 12.0, TimeSpan::years(1.0));
        let series = SeriesGenerator::new().generate_with(
            &input,
            InterestType::Compound,
            Compounding::Monthly,
        );

        assert_eq!(series.len(), 12);
        assert_relative_eq!(series[11].total, 1000.0 * 1.01_f64.powi(11), epsilon = 1e-9);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(SeriesUnit::for_compounding(Compounding::Annual).axis_label(), "Year");
        assert_eq!(SeriesUnit::for_compounding(Compounding::Monthly).axis_label(), "Month");
        assert_eq!(SeriesUnit::for_compounding(Compounding::PerUnit), SeriesUnit::Month);
    }

    #[test]
    fn test_monotonic() {
        let input = CalculationInput::new(500.0, 3.5, TimeSpan::new(4.0, 2.0, 10.0))
            .with_compounding(Compounding::PerUnit);
        let series = SeriesGenerator::new().generate(&input);

        assert!(!series.is_empty());
        assert!(series.windows(2).all(|w| w[0].total <= w[1].total));
    }
}
