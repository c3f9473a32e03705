//! Calculation logic for the settlement engine.
//!
//! This module contains the statutory calculators (13th salary, vacation
//! with the constitutional third, FGTS with the 40% penalty, overtime with
//! its reflexes, and the art. 477 / art. 467 penalties) and the case-level
//! aggregation that runs them for a whole claim.
//!
//! Every calculator is a pure function: the same inputs always give the
//! same result, and nothing is rounded until presentation.

mod fgts;
mod overtime_reflexes;
mod penalties;
mod settlement;
mod thirteenth_salary;
mod vacation;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::formatting::format_amount;

pub use fgts::{FGTS_PENALTY_RATE, FGTS_RATE, calc_fgts};
pub use overtime_reflexes::{
    DEFAULT_MONTHS_WITH_OVERTIME, DEFAULT_OVERTIME_SURCHARGE_PCT, DSR_DIVISOR, MONTHLY_HOURS_BASE,
    calc_overtime_reflexes,
};
pub use penalties::{PENALTY_467_RATE, calc_penalty_467, calc_penalty_477};
pub use settlement::{
    CATEGORY_FGTS, CATEGORY_OVERTIME, CATEGORY_PENALTY_467, CATEGORY_PENALTY_477,
    CATEGORY_THIRTEENTH, CATEGORY_VACATION, FgtsClaim, OvertimeClaim, SettlementClaim,
    ThirteenthClaim, VacationClaim, calculate_settlement,
};
pub use thirteenth_salary::calc_thirteenth;
pub use vacation::calc_vacation;

/// Months in a year, the divisor for proportional amounts.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Currency text used inside formula descriptions.
fn money(value: Decimal) -> EngineResult<String> {
    format_amount(value, false)
}
