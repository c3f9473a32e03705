//! Statutory penalty calculations (CLT arts. 477 and 467).

use rust_decimal::Decimal;

use crate::arithmetic::mul;
use crate::error::{EngineResult, ensure_non_negative};
use crate::models::{CalculationKind, CalculationLineItem, CalculationResult};

use super::money;

/// Share of uncontested amounts owed as the art. 467 penalty: 50%.
pub const PENALTY_467_RATE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Penalty for late payment of termination amounts (CLT, art. 477, §8º).
///
/// Equal to one monthly salary.
///
/// # Examples
///
/// ```
/// use verbas_engine::calculation::calc_penalty_477;
/// use rust_decimal::Decimal;
///
/// let result = calc_penalty_477(Decimal::from(3500)).unwrap();
/// assert_eq!(result.total(), Decimal::from(3500));
/// ```
pub fn calc_penalty_477(monthly_salary: Decimal) -> EngineResult<CalculationResult> {
    ensure_non_negative("monthly_salary", monthly_salary)?;

    let item = CalculationLineItem::new(
        "penalty_477",
        "Multa do art. 477, §8º da CLT",
        format!("1 salário mensal ({})", money(monthly_salary)?),
        monthly_salary,
    );

    CalculationResult::from_items(CalculationKind::Penalty477, vec![item])
}

/// Penalty for not paying uncontested termination amounts at the first
/// hearing (CLT, art. 467): 50% of those amounts.
///
/// # Examples
///
/// ```
/// use verbas_engine::calculation::calc_penalty_467;
/// use rust_decimal::Decimal;
///
/// let result = calc_penalty_467(Decimal::from(1000)).unwrap();
/// assert_eq!(result.total(), Decimal::from(500));
/// ```
pub fn calc_penalty_467(uncontested_amount: Decimal) -> EngineResult<CalculationResult> {
    ensure_non_negative("uncontested_amount", uncontested_amount)?;

    let item = CalculationLineItem::new(
        "penalty_467",
        "Multa do art. 467 da CLT",
        format!("{} × 50%", money(uncontested_amount)?),
        mul(uncontested_amount, PENALTY_467_RATE)?,
    );

    CalculationResult::from_items(CalculationKind::Penalty467, vec![item])
}
