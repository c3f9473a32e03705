//! Core data models for the settlement calculation engine.
//!
//! All models are value types built fresh for each calculation.

mod calculation_result;
mod case_report;
mod overtime_reflexes;

pub use calculation_result::{CalculationKind, CalculationLineItem, CalculationResult};
pub use case_report::{CaseReport, ReportSection};
pub use overtime_reflexes::{OvertimeReflex, OvertimeReflexSet, ReflexKind};
