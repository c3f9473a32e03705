//! Vacation pay calculation.
//!
//! Expired periods are paid as one full salary each; the current period is
//! paid in twelfths. Both carry the constitutional one-third bonus (CF/88,
//! art. 7º, XVII).

use rust_decimal::Decimal;
use tracing::debug;

use crate::arithmetic::{div, mul};
use crate::error::{EngineError, EngineResult, ensure_non_negative};
use crate::models::{CalculationKind, CalculationLineItem, CalculationResult};

use super::{MONTHS_PER_YEAR, money};

/// Calculates expired and proportional vacation, each with its third.
///
/// Each nonzero component contributes two line items, the base and its
/// third. When both components are zero the result is empty.
///
/// # Arguments
///
/// * `monthly_salary` - The employee's monthly salary
/// * `acquisition_period_months` - Length of the acquisition period (12 for
///   a complete period). Kept for callers that display it; it does not
///   change any value.
/// * `expired_periods` - Number of expired (vencidas) vacation periods
/// * `prorated_months` - Months for proportional vacation, `0..=12`
///
/// # Errors
///
/// - [`EngineError::InvalidAmount`] if the salary is negative
/// - [`EngineError::InvalidInput`] if `prorated_months > 12`
/// - [`EngineError::CalculationError`] if an amount overflows
///
/// # Examples
///
/// ```
/// use verbas_engine::calculation::calc_vacation;
/// use rust_decimal::Decimal;
///
/// let result = calc_vacation(Decimal::from(3000), 12, 1, 6).unwrap();
/// assert_eq!(result.total(), Decimal::from(6000));
/// assert_eq!(result.line_items().len(), 4);
/// ```
pub fn calc_vacation(
    monthly_salary: Decimal,
    acquisition_period_months: u32,
    expired_periods: u32,
    prorated_months: u32,
) -> EngineResult<CalculationResult> {
    ensure_non_negative("monthly_salary", monthly_salary)?;
    if prorated_months > MONTHS_PER_YEAR {
        return Err(EngineError::invalid_input(
            "prorated_months",
            format!("must be between 0 and 12, got {}", prorated_months),
        ));
    }
    debug!(
        %monthly_salary,
        acquisition_period_months,
        expired_periods,
        prorated_months,
        "Calculating vacation"
    );

    let three = Decimal::from(3);
    let salary_text = money(monthly_salary)?;
    let mut items = Vec::with_capacity(4);

    if expired_periods > 0 {
        let periods = Decimal::from(expired_periods);
        let expired = mul(monthly_salary, periods)?;
        let expired_third = div(expired, three)?;

        items.push(CalculationLineItem::new(
            "vacation_expired",
            format!("Férias vencidas ({} período(s))", expired_periods),
            format!("{} × {}", salary_text, expired_periods),
            expired,
        ));
        items.push(CalculationLineItem::new(
            "vacation_expired_third",
            "1/3 constitucional sobre férias vencidas",
            format!("{} ÷ 3 × {}", salary_text, expired_periods),
            expired_third,
        ));
    }

    if prorated_months > 0 {
        let proportional = div(
            mul(monthly_salary, Decimal::from(prorated_months))?,
            Decimal::from(MONTHS_PER_YEAR),
        )?;
        let proportional_third = div(proportional, three)?;

        items.push(CalculationLineItem::new(
            "vacation_proportional",
            format!("Férias proporcionais ({} meses)", prorated_months),
            format!("{} ÷ 12 × {}", salary_text, prorated_months),
            proportional,
        ));
        items.push(CalculationLineItem::new(
            "vacation_proportional_third",
            "1/3 constitucional sobre férias proporcionais",
            format!("{} ÷ 3", money(proportional)?),
            proportional_third,
        ));
    }

    CalculationResult::from_items(CalculationKind::Vacation, items)
}
