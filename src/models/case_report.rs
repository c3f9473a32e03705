//! Case-level aggregation of calculation results.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::arithmetic;
use crate::error::EngineResult;

use super::CalculationResult;

/// One category of a [`CaseReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    /// Category label as it appears in the statement (e.g. "FGTS").
    pub label: String,
    /// The calculation filed under this label.
    pub result: CalculationResult,
}

/// An ordered mapping from category label to [`CalculationResult`].
///
/// Labels are unique. Inserting a label that already exists replaces its
/// result without moving it.
///
/// # Example
///
/// ```
/// use verbas_engine::calculation::{calc_penalty_467, calc_penalty_477};
/// use verbas_engine::models::CaseReport;
/// use rust_decimal::Decimal;
///
/// let mut report = CaseReport::new();
/// report.insert("Multa art. 477", calc_penalty_477(Decimal::from(3500)).unwrap());
/// report.insert("Multa art. 467", calc_penalty_467(Decimal::from(1000)).unwrap());
/// assert_eq!(report.grand_total().unwrap(), Decimal::from(4000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    sections: Vec<ReportSection>,
}

impl CaseReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the result filed under `label`.
    pub fn insert(&mut self, label: impl Into<String>, result: CalculationResult) {
        let label = label.into();
        match self.sections.iter_mut().find(|s| s.label == label) {
            Some(section) => section.result = result,
            None => self.sections.push(ReportSection { label, result }),
        }
    }

    /// Returns the result filed under `label`.
    pub fn get(&self, label: &str) -> Option<&CalculationResult> {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .map(|s| &s.result)
    }

    /// The sections, in insertion order.
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the report has no categories.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sum of every category total.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
    /// if the sum overflows.
    pub fn grand_total(&self) -> EngineResult<Decimal> {
        arithmetic::sum(self.sections.iter().map(|s| s.result.total()))
    }
}
