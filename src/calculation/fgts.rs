//! FGTS (Fundo de Garantia do Tempo de Serviço) calculation.
//!
//! The employer deposits 8% of the monthly salary (Lei 8.036/1990, art. 15).
//! On dismissal without cause the employer also pays a penalty of 40% of the
//! deposits (art. 18, §1º).

use rust_decimal::Decimal;

use crate::arithmetic::mul;
use crate::error::{EngineResult, ensure_non_negative};
use crate::models::{CalculationKind, CalculationLineItem, CalculationResult};

use super::money;

/// Monthly FGTS deposit rate: 8%.
pub const FGTS_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Termination penalty over FGTS deposits: 40%.
pub const FGTS_PENALTY_RATE: Decimal = Decimal::from_parts(40, 0, 0, false, 2);

/// Calculates FGTS deposits and, optionally, the 40% penalty.
///
/// - base: `monthly_salary × 0.08 × months_worked`
/// - penalty: `base × 0.40`
///
/// # Errors
///
/// - [`InvalidAmount`](crate::error::EngineError::InvalidAmount) if the
///   salary is negative
/// - [`CalculationError`](crate::error::EngineError::CalculationError) if an
///   amount overflows
///
/// # Examples
///
/// ```
/// use verbas_engine::calculation::calc_fgts;
/// use rust_decimal::Decimal;
///
/// let result = calc_fgts(Decimal::from(2000), 12, true).unwrap();
/// assert_eq!(result.total(), Decimal::from(2688));
/// ```
pub fn calc_fgts(
    monthly_salary: Decimal,
    months_worked: u32,
    include_40pct_penalty: bool,
) -> EngineResult<CalculationResult> {
    ensure_non_negative("monthly_salary", monthly_salary)?;

    let base = mul(mul(monthly_salary, FGTS_RATE)?, Decimal::from(months_worked))?;

    let mut items = vec![CalculationLineItem::new(
        "fgts_base",
        "FGTS (8% sobre salário)",
        format!("{} × 8% × {} meses", money(monthly_salary)?, months_worked),
        base,
    )];

    if include_40pct_penalty {
        items.push(CalculationLineItem::new(
            "fgts_penalty",
            "Multa de 40% sobre FGTS",
            format!("{} × 40%", money(base)?),
            mul(base, FGTS_PENALTY_RATE)?,
        ));
    }

    CalculationResult::from_items(CalculationKind::Fgts, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fgts_with_penalty() {
        let result = calc_fgts(dec("2000"), 12, true).unwrap();

        assert_eq!(result.kind(), CalculationKind::Fgts);
        assert_eq!(result.item("fgts_base").unwrap().value, dec("1920.00"));
        assert_eq!(result.item("fgts_penalty").unwrap().value, dec("768.00"));
        assert_eq!(result.total(), dec("2688.00"));
    }

    #[test]
    fn test_fgts_without_penalty() {
        let result = calc_fgts(dec("2000"), 12, false).unwrap();

        assert_eq!(result.line_items().len(), 1);
        assert!(result.item("fgts_penalty").is_none());
        assert_eq!(result.total(), dec("1920.00"));
    }

    #[test]
    fn test_formula_descriptions() {
        let result = calc_fgts(dec("2000"), 12, true).unwrap();

        assert_eq!(
            result.line_items()[0].formula_description,
            "R$ 2.000,00 × 8% × 12 meses"
        );
        assert_eq!(result.line_items()[1].formula_description, "R$ 1.920,00 × 40%");
    }

    #[test]
    fn test_zero_months_gives_zero() {
        let result = calc_fgts(dec("2000"), 0, true).unwrap();
        assert_eq!(result.total(), Decimal::ZERO);
        assert_eq!(result.line_items().len(), 2);
    }

    #[test]
    fn test_rates_are_exact() {
        assert_eq!(FGTS_RATE, dec("0.08"));
        assert_eq!(FGTS_PENALTY_RATE, dec("0.40"));
    }

    #[test]
    fn test_salary_too_large_is_an_error() {
        let err = calc_fgts(Decimal::MAX, 12, true).unwrap_err();
        assert!(matches!(err, EngineError::CalculationError { .. }));
    }

    #[test]
    fn test_negative_salary_rejected() {
        let err = calc_fgts(dec("-2000"), 12, true).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount { .. }));
    }
}
