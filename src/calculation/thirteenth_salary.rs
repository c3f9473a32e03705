//! 13th salary (gratificação natalina) calculation.
//!
//! The 13th salary is one monthly salary per year, paid in proportion to the
//! months worked when the contract ends before the year closes (Lei
//! 4.090/1962).

use rust_decimal::Decimal;

use crate::arithmetic::{div, mul};
use crate::error::{EngineError, EngineResult, ensure_non_negative};
use crate::models::{CalculationKind, CalculationLineItem, CalculationResult};

use super::{MONTHS_PER_YEAR, money};

/// Calculates the 13th salary.
///
/// - prorated: `monthly_salary / 12 × months_worked`
/// - full: `monthly_salary`; `months_worked` is not used
///
/// # Arguments
///
/// * `monthly_salary` - The employee's monthly salary
/// * `months_worked` - Months worked in the reference year, `0..=12`
/// * `prorated` - Whether to pay in proportion to `months_worked`
///
/// # Errors
///
/// - [`EngineError::InvalidAmount`] if the salary is negative
/// - [`EngineError::InvalidInput`] if prorated and `months_worked > 12`
/// - [`EngineError::CalculationError`] if the salary is too large to multiply
///
/// # Examples
///
/// ```
/// use verbas_engine::calculation::calc_thirteenth;
/// use rust_decimal::Decimal;
///
/// let result = calc_thirteenth(Decimal::from(3000), 6, true).unwrap();
/// assert_eq!(result.total(), Decimal::from(1500));
/// assert_eq!(result.line_items()[0].label, "13º salário proporcional");
/// ```
pub fn calc_thirteenth(
    monthly_salary: Decimal,
    months_worked: u32,
    prorated: bool,
) -> EngineResult<CalculationResult> {
    ensure_non_negative("monthly_salary", monthly_salary)?;

    let item = if prorated {
        if months_worked > MONTHS_PER_YEAR {
            return Err(EngineError::invalid_input(
                "months_worked",
                format!("must be between 0 and 12, got {}", months_worked),
            ));
        }
        // Multiply before dividing so whole-month fractions stay exact.
        let value = div(
            mul(monthly_salary, Decimal::from(months_worked))?,
            Decimal::from(MONTHS_PER_YEAR),
        )?;
        CalculationLineItem::new(
            "thirteenth_prorated",
            "13º salário proporcional",
            format!("{} ÷ 12 × {} meses", money(monthly_salary)?, months_worked),
            value,
        )
    } else {
        CalculationLineItem::new(
            "thirteenth_full",
            "13º salário integral",
            format!("{} (integral)", money(monthly_salary)?),
            monthly_salary,
        )
    };

    CalculationResult::from_items(CalculationKind::ThirteenthSalary, vec![item])
}
