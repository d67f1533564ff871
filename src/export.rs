//! CSV and JSON export of calculations, series and history

use crate::calc::{SeriesPoint, SeriesUnit};
use crate::calculator::Calculation;
use crate::error::ExportError;
use crate::history::HistoryEntry;
use serde::Serialize;
use std::io::Write;

/// Write the growth series as `<Year|Month>,Total` rows
pub fn write_series_csv<W: Write>(
    writer: W,
    unit: SeriesUnit,
    series: &[SeriesPoint],
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([unit.axis_label(), "Total"])?;
    for point in series {
        wtr.write_record([point.period.to_string(), format!("{:.2}", point.total)])?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct HistoryRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "Rate")]
    rate_percent: f64,
    #[serde(rename = "Years")]
    years: f64,
    #[serde(rename = "Months")]
    months: f64,
    #[serde(rename = "Days")]
    days: f64,
    #[serde(rename = "Compounding")]
    compounding: &'a str,
    #[serde(rename = "InterestType")]
    interest_type: &'a str,
    #[serde(rename = "Interest")]
    interest: String,
    #[serde(rename = "Total")]
    total: String,
}

/// Write the history log, one row per entry in insertion order
pub fn write_history_csv<W: Write>(writer: W, entries: &[HistoryEntry]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for entry in entries {
        wtr.serialize(HistoryRow {
            date: entry.created_at.to_rfc3339(),
            principal: entry.principal,
            rate_percent: entry.rate_percent,
            years: entry.years,
            months: entry.months,
            days: entry.days,
            compounding: entry.compounding.as_str(),
            interest_type: entry.interest_type.as_str(),
            interest: entry.interest.to_string(),
            total: entry.total.to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a standalone JSON report of one calculation
pub fn write_report_json<W: Write>(
    writer: W,
    calculation: &Calculation,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, calculation)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{CalculationInput, Compounding, InterestEngine, InterestType, TimeSpan};
    use crate::calculator::Calculator;
    use crate::history::{HistoryLog, MemoryStore};

    fn calculation() -> (Calculation, Vec<HistoryEntry>) {
        let log = HistoryLog::open(MemoryStore::new()).unwrap();
        let mut calc = Calculator::new(InterestEngine::default(), log);
        let input = CalculationInput::new(1000.0, 10.0, TimeSpan::years(2.0))
            .with_compounding(Compounding::Annual)
            .with_interest_type(InterestType::Simple);
        let calculation = calc.calculate(input).unwrap();
        (calculation, calc.history().to_vec())
    }

    #[test]
    fn test_series_csv() {
        let (calculation, _) = calculation();
        let mut out = Vec::new();
        write_series_csv(&mut out, calculation.unit, &calculation.series).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Year,Total\n0,1000.00\n1,1100.00\n");
    }

    #[test]
    fn test_history_csv() {
        let (_, history) = calculation();
        let mut out = Vec::new();
        write_history_csv(&mut out, &history).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Date,Principal,Rate,Years,Months,Days,Compounding,InterestType,Interest,Total")
        );
        let row = lines.next().unwrap();
        assert!(row.ends_with(",1000.0,10.0,2.0,0.0,0.0,annual,simple,200.00,1200.00"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_report_json() {
        let (calculation, _) = calculation();
        let mut out = Vec::new();
        write_report_json(&mut out, &calculation).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["result"]["total"], "1200.00");
        assert_eq!(json["unit"], "Year");
        assert_eq!(json["series"].as_array().unwrap().len(), 2);
    }
}
