//! Request handling: validate, compute, record, and build the growth series

use crate::calc::{
    CalculationInput, CalculationResult, InterestEngine, SeriesGenerator, SeriesPoint, SeriesUnit,
};
use crate::error::{CalcError, StoreError};
use crate::history::{HistoryEntry, HistoryLog, KeyValueStore};
use chrono::Utc;
use log::info;
use serde::Serialize;

/// Everything produced by one successful calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub input: CalculationInput,
    pub result: CalculationResult,
    pub unit: SeriesUnit,
    pub series: Vec<SeriesPoint>,
}

/// Calculator wiring the engine, series generator and history log together
#[derive(Debug)]
pub struct Calculator<S: KeyValueStore> {
    engine: InterestEngine,
    series: SeriesGenerator,
    history: HistoryLog<S>,
    record_history: bool,
}

impl<S: KeyValueStore> Calculator<S> {
    pub fn new(engine: InterestEngine, history: HistoryLog<S>) -> Self {
        Self {
            engine,
            series: SeriesGenerator::new(),
            history,
            record_history: true,
        }
    }

    /// Skip history writes (dry runs)
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }

    pub fn engine(&self) -> &InterestEngine {
        &self.engine
    }

    /// Compute a result and its series, appending a history entry.
    /// Invalid input fails before anything is recorded.
    pub fn calculate(&mut self, input: CalculationInput) -> Result<Calculation, CalcError> {
        let result = self.engine.compute(&input)?;

        if self.record_history {
            self.history.append(HistoryEntry::new(&input, &result, Utc::now()))?;
        }

        let series = self.series.generate(&input);
        info!(
            "Calculated {} interest {} on {} ({} {} periods)",
            input.interest_type,
            result.interest,
            result.principal,
            series.len(),
            SeriesUnit::for_compounding(input.compounding)
        );

        Ok(Calculation {
            input,
            result,
            unit: SeriesUnit::for_compounding(input.compounding),
            series,
        })
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.load_all()
    }

    pub fn clear_history(&mut self) -> Result<(), StoreError> {
        self.history.clear()
    }
}
