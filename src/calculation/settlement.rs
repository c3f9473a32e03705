//! Case-level settlement calculation.
//!
//! Runs each calculator whose inputs are present on a [`SettlementClaim`]
//! and files the results in a [`CaseReport`] under fixed Portuguese
//! category labels.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::CaseReport;

use super::{
    DEFAULT_MONTHS_WITH_OVERTIME, DEFAULT_OVERTIME_SURCHARGE_PCT, MONTHS_PER_YEAR,
    calc_fgts, calc_overtime_reflexes, calc_penalty_467, calc_penalty_477, calc_thirteenth,
    calc_vacation,
};

/// Category label for the 13th salary.
pub const CATEGORY_THIRTEENTH: &str = "13º Salário";
/// Category label for vacation pay.
pub const CATEGORY_VACATION: &str = "Férias";
/// Category label for FGTS.
pub const CATEGORY_FGTS: &str = "FGTS";
/// Category label for overtime and its reflexes.
pub const CATEGORY_OVERTIME: &str = "Horas Extras e Reflexos";
/// Category label for the art. 477 penalty.
pub const CATEGORY_PENALTY_477: &str = "Multa do Art. 477";
/// Category label for the art. 467 penalty.
pub const CATEGORY_PENALTY_467: &str = "Multa do Art. 467";

fn default_true() -> bool {
    true
}

fn default_acquisition_period() -> u32 {
    MONTHS_PER_YEAR
}

fn default_surcharge() -> Decimal {
    DEFAULT_OVERTIME_SURCHARGE_PCT
}

fn default_overtime_months() -> u32 {
    DEFAULT_MONTHS_WITH_OVERTIME
}

/// 13th salary inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirteenthClaim {
    /// Months worked in the reference year.
    pub months_worked: u32,
    /// Whether to pay in proportion to the months worked.
    #[serde(default = "default_true")]
    pub prorated: bool,
}

/// Vacation inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationClaim {
    /// Length of the acquisition period, 12 when complete.
    #[serde(default = "default_acquisition_period")]
    pub acquisition_period_months: u32,
    /// Number of expired vacation periods.
    #[serde(default)]
    pub expired_periods: u32,
    /// Months for proportional vacation.
    #[serde(default)]
    pub prorated_months: u32,
}

/// FGTS inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FgtsClaim {
    /// Months of deposits.
    pub months_worked: u32,
    /// Whether the 40% termination penalty applies.
    #[serde(default = "default_true")]
    pub include_penalty: bool,
}

/// Overtime inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeClaim {
    /// Average overtime hours per month.
    pub hours_per_month: Decimal,
    /// Surcharge in percent.
    #[serde(default = "default_surcharge")]
    pub surcharge_pct: Decimal,
    /// Months in which overtime was worked.
    #[serde(default = "default_overtime_months")]
    pub months: u32,
}

/// Everything claimed in one labor case.
///
/// Absent sections are simply not calculated.
///
/// # Example
///
/// ```
/// use verbas_engine::calculation::{calculate_settlement, FgtsClaim, SettlementClaim};
/// use rust_decimal::Decimal;
///
/// let claim = SettlementClaim {
///     monthly_salary: Decimal::from(2000),
///     fgts: Some(FgtsClaim { months_worked: 12, include_penalty: true }),
///     ..SettlementClaim::default()
/// };
/// let report = calculate_settlement(&claim).unwrap();
/// assert_eq!(report.grand_total().unwrap(), Decimal::from(2688));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementClaim {
    /// Monthly salary used by every calculator.
    pub monthly_salary: Decimal,
    /// 13th salary claim.
    #[serde(default)]
    pub thirteenth: Option<ThirteenthClaim>,
    /// Vacation claim.
    #[serde(default)]
    pub vacation: Option<VacationClaim>,
    /// FGTS claim.
    #[serde(default)]
    pub fgts: Option<FgtsClaim>,
    /// Overtime claim.
    #[serde(default)]
    pub overtime: Option<OvertimeClaim>,
    /// Whether the art. 477 late-payment penalty is claimed.
    #[serde(default)]
    pub penalty_477: bool,
    /// Uncontested amounts, when the art. 467 penalty is claimed.
    #[serde(default)]
    pub uncontested_amount: Option<Decimal>,
}

/// Calculates every item of a claim into a [`CaseReport`].
///
/// Categories are filed in a fixed order: 13th salary, vacation, FGTS,
/// overtime, art. 477 penalty, art. 467 penalty. The first failing
/// calculator aborts the whole report.
pub fn calculate_settlement(claim: &SettlementClaim) -> EngineResult<CaseReport> {
    let salary = claim.monthly_salary;
    let mut report = CaseReport::new();

    if let Some(thirteenth) = &claim.thirteenth {
        let result = calc_thirteenth(salary, thirteenth.months_worked, thirteenth.prorated)?;
        debug!(category = CATEGORY_THIRTEENTH, total = %result.total(), "Category calculated");
        report.insert(CATEGORY_THIRTEENTH, result);
    }

    if let Some(vacation) = &claim.vacation {
        let result = calc_vacation(
            salary,
            vacation.acquisition_period_months,
            vacation.expired_periods,
            vacation.prorated_months,
        )?;
        debug!(category = CATEGORY_VACATION, total = %result.total(), "Category calculated");
        report.insert(CATEGORY_VACATION, result);
    }

    if let Some(fgts) = &claim.fgts {
        let result = calc_fgts(salary, fgts.months_worked, fgts.include_penalty)?;
        debug!(category = CATEGORY_FGTS, total = %result.total(), "Category calculated");
        report.insert(CATEGORY_FGTS, result);
    }

    if let Some(overtime) = &claim.overtime {
        let set = calc_overtime_reflexes(
            salary,
            overtime.hours_per_month,
            overtime.surcharge_pct,
            overtime.months,
        )?;
        debug!(category = CATEGORY_OVERTIME, total = %set.total(), "Category calculated");
        report.insert(CATEGORY_OVERTIME, set.try_into()?);
    }

    if claim.penalty_477 {
        let result = calc_penalty_477(salary)?;
        debug!(category = CATEGORY_PENALTY_477, total = %result.total(), "Category calculated");
        report.insert(CATEGORY_PENALTY_477, result);
    }

    if let Some(uncontested) = claim.uncontested_amount {
        let result = calc_penalty_467(uncontested)?;
        debug!(category = CATEGORY_PENALTY_467, total = %result.total(), "Category calculated");
        report.insert(CATEGORY_PENALTY_467, result);
    }

    Ok(report)
}
