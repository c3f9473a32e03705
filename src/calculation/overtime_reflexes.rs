//! Overtime with its mandatory legal reflexes.
//!
//! ## Calculation chain
//!
//! 1. Normal hourly rate: monthly salary ÷ 220
//! 2. Overtime hourly rate: normal rate × (1 + surcharge ÷ 100)
//! 3. Overtime value: overtime rate × hours per month × months
//! 4. DSR: overtime value ÷ 6
//! 5. Monthly average: overtime value ÷ months, reflected as-is on the 13th
//!    salary, vacation and notice period
//! 6. Vacation third: vacation reflex ÷ 3
//! 7. FGTS: (overtime value + DSR) × 8%, and its 40% penalty
//!
//! No intermediate value is rounded.

use rust_decimal::Decimal;
use tracing::debug;

use crate::arithmetic::{add, div, mul};
use crate::error::{EngineError, EngineResult, ensure_non_negative};
use crate::models::{CalculationLineItem, OvertimeReflex, OvertimeReflexSet, ReflexKind};

use super::fgts::{FGTS_PENALTY_RATE, FGTS_RATE};
use super::money;

/// Standard monthly hour base (44-hour week).
pub const MONTHLY_HOURS_BASE: Decimal = Decimal::from_parts(220, 0, 0, false, 0);

/// Divisor approximating the paid-rest share of overtime.
pub const DSR_DIVISOR: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Constitutional minimum overtime surcharge, in percent.
pub const DEFAULT_OVERTIME_SURCHARGE_PCT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Default number of months with overtime.
pub const DEFAULT_MONTHS_WITH_OVERTIME: u32 = 12;

/// Calculates overtime and every reflex.
///
/// The returned set always holds the 8 entries of [`ReflexKind::ALL`], in that
/// order, even when no overtime hours were worked.
///
/// # Arguments
///
/// * `monthly_salary` - The employee's monthly salary
/// * `overtime_hours_per_month` - Average overtime hours per month
/// * `surcharge_pct` - Overtime surcharge in percent (usually 50 or 100)
/// * `months_with_overtime` - Months in which overtime was worked
///
/// # Errors
///
/// - [`EngineError::InvalidAmount`] if the salary is negative
/// - [`EngineError::InvalidInput`] if `months_with_overtime` is zero or the
///   hours or surcharge are negative
/// - [`EngineError::CalculationError`] if an amount overflows
///
/// # Examples
///
/// ```
/// use verbas_engine::calculation::{calc_overtime_reflexes, DEFAULT_OVERTIME_SURCHARGE_PCT};
/// use verbas_engine::models::ReflexKind;
/// use rust_decimal::Decimal;
///
/// let set = calc_overtime_reflexes(
///     Decimal::from(2200),
///     Decimal::from(10),
///     DEFAULT_OVERTIME_SURCHARGE_PCT,
///     12,
/// )
/// .unwrap();
/// assert_eq!(set.value_of(ReflexKind::OvertimeValue), Some(Decimal::from(1800)));
/// assert_eq!(set.value_of(ReflexKind::WeeklyRest), Some(Decimal::from(300)));
/// ```
pub fn calc_overtime_reflexes(
    monthly_salary: Decimal,
    overtime_hours_per_month: Decimal,
    surcharge_pct: Decimal,
    months_with_overtime: u32,
) -> EngineResult<OvertimeReflexSet> {
    ensure_non_negative("monthly_salary", monthly_salary)?;
    if months_with_overtime == 0 {
        return Err(EngineError::invalid_input(
            "months_with_overtime",
            "must be greater than zero",
        ));
    }
    if overtime_hours_per_month < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "overtime_hours_per_month",
            format!("cannot be negative, got {}", overtime_hours_per_month),
        ));
    }
    if surcharge_pct < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "surcharge_pct",
            format!("cannot be negative, got {}", surcharge_pct),
        ));
    }

    let months = Decimal::from(months_with_overtime);

    let normal_hourly_rate = div(monthly_salary, MONTHLY_HOURS_BASE)?;
    let multiplier = add(Decimal::ONE, div(surcharge_pct, Decimal::ONE_HUNDRED)?)?;
    let overtime_hourly_rate = mul(normal_hourly_rate, multiplier)?;
    let total_overtime_hours = mul(overtime_hours_per_month, months)?;

    let overtime_value = mul(overtime_hourly_rate, total_overtime_hours)?;
    let dsr = div(overtime_value, DSR_DIVISOR)?;
    let monthly_average = div(overtime_value, months)?;
    let vacation_reflex = monthly_average;
    let vacation_third = div(vacation_reflex, Decimal::from(3))?;
    let fgts_reflex = mul(add(overtime_value, dsr)?, FGTS_RATE)?;
    let fgts_penalty_reflex = mul(fgts_reflex, FGTS_PENALTY_RATE)?;

    debug!(
        %normal_hourly_rate,
        %overtime_hourly_rate,
        %total_overtime_hours,
        %overtime_value,
        "Calculating overtime reflexes"
    );

    let average_formula = "Média mensal de HE";
    let entries = [
        (
            ReflexKind::OvertimeValue,
            format!("Horas Extras ({}%)", surcharge_pct.normalize()),
            format!(
                "{}h × {}",
                total_overtime_hours.normalize(),
                money(overtime_hourly_rate)?
            ),
            overtime_value,
        ),
        (
            ReflexKind::WeeklyRest,
            "DSR sobre Horas Extras".to_string(),
            format!("{} ÷ 6", money(overtime_value)?),
            dsr,
        ),
        (
            ReflexKind::ThirteenthSalary,
            "Reflexos em 13º Salário".to_string(),
            average_formula.to_string(),
            monthly_average,
        ),
        (
            ReflexKind::Vacation,
            "Reflexos em Férias".to_string(),
            average_formula.to_string(),
            vacation_reflex,
        ),
        (
            ReflexKind::VacationThird,
            "Reflexos em 1/3 de Férias".to_string(),
            format!("{} ÷ 3", money(vacation_reflex)?),
            vacation_third,
        ),
        (
            ReflexKind::Fgts,
            "Reflexos em FGTS".to_string(),
            "(HE + DSR) × 8%".to_string(),
            fgts_reflex,
        ),
        (
            ReflexKind::FgtsPenalty,
            "Reflexos em Multa 40% FGTS".to_string(),
            format!("{} × 40%", money(fgts_reflex)?),
            fgts_penalty_reflex,
        ),
        (
            ReflexKind::NoticePeriod,
            "Reflexos em Aviso Prévio".to_string(),
            average_formula.to_string(),
            monthly_average,
        ),
    ];

    let reflexes = entries
        .into_iter()
        .map(|(kind, label, formula, value)| OvertimeReflex {
            kind,
            item: CalculationLineItem::new(kind.code(), label, formula, value),
        })
        .collect();

    OvertimeReflexSet::new(
        normal_hourly_rate,
        overtime_hourly_rate,
        total_overtime_hours,
        monthly_average,
        reflexes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalculationResult;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_set() -> OvertimeReflexSet {
        calc_overtime_reflexes(dec("2200"), dec("10"), dec("50"), 12).unwrap()
    }

    #[test]
    fn test_rates_and_hours() {
        let set = reference_set();

        assert_eq!(set.normal_hourly_rate, dec("10.00"));
        assert_eq!(set.overtime_hourly_rate, dec("15.00"));
        assert_eq!(set.total_overtime_hours, dec("120"));
        assert_eq!(set.monthly_average, dec("150"));
    }

    #[test]
    fn test_every_reflex_value() {
        let set = reference_set();

        assert_eq!(set.value_of(ReflexKind::OvertimeValue), Some(dec("1800.00")));
        assert_eq!(set.value_of(ReflexKind::WeeklyRest), Some(dec("300.00")));
        assert_eq!(set.value_of(ReflexKind::ThirteenthSalary), Some(dec("150")));
        assert_eq!(set.value_of(ReflexKind::Vacation), Some(dec("150")));
        assert_eq!(set.value_of(ReflexKind::VacationThird), Some(dec("50")));
        assert_eq!(set.value_of(ReflexKind::Fgts), Some(dec("168")));
        assert_eq!(set.value_of(ReflexKind::FgtsPenalty), Some(dec("67.2")));
        assert_eq!(set.value_of(ReflexKind::NoticePeriod), Some(dec("150")));
    }

    #[test]
    fn test_total_is_sum_of_entries() {
        let set = reference_set();
        let sum: Decimal = set.reflexes().iter().map(|r| r.item.value).sum();

        assert_eq!(set.total(), sum);
        assert_eq!(set.total(), dec("2835.20"));
    }

    #[test]
    fn test_entries_are_complete_and_ordered() {
        let set = reference_set();
        let kinds: Vec<ReflexKind> = set.reflexes().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, ReflexKind::ALL.to_vec());
    }

    #[test]
    fn test_zero_hours_still_yields_every_entry() {
        let set = calc_overtime_reflexes(dec("2200"), Decimal::ZERO, dec("50"), 12).unwrap();
        assert_eq!(set.reflexes().len(), 8);
        assert_eq!(set.total(), Decimal::ZERO);
    }

    #[test]
    fn test_labels_and_formulas() {
        let set = reference_set();
        let items: Vec<&CalculationLineItem> = set.reflexes().iter().map(|r| &r.item).collect();

        assert_eq!(items[0].label, "Horas Extras (50%)");
        assert_eq!(items[0].formula_description, "120h × R$ 15,00");
        assert_eq!(items[1].formula_description, "R$ 1.800,00 ÷ 6");
        assert_eq!(items[2].formula_description, "Média mensal de HE");
        assert_eq!(items[4].formula_description, "R$ 150,00 ÷ 3");
        assert_eq!(items[5].formula_description, "(HE + DSR) × 8%");
        assert_eq!(items[6].formula_description, "R$ 168,00 × 40%");
        assert_eq!(items[7].label, "Reflexos em Aviso Prévio");
    }

    #[test]
    fn test_full_surcharge() {
        let set = calc_overtime_reflexes(dec("2200"), dec("10"), dec("100"), 12).unwrap();
        assert_eq!(set.overtime_hourly_rate, dec("20"));
        assert_eq!(set.value_of(ReflexKind::OvertimeValue), Some(dec("2400")));
        assert_eq!(set.reflexes()[0].item.label, "Horas Extras (100%)");
    }

    #[test]
    fn test_fractional_hours_and_partial_year() {
        let set = calc_overtime_reflexes(dec("2200"), dec("7.5"), dec("50"), 4).unwrap();
        assert_eq!(set.total_overtime_hours, dec("30"));
        assert_eq!(set.value_of(ReflexKind::OvertimeValue), Some(dec("450")));
        assert_eq!(set.monthly_average, dec("112.5"));
    }

    #[test]
    fn test_uneven_monthly_average_keeps_exact_sum() {
        // 2000 ÷ 220 never terminates, so neither does anything derived from it.
        let set = calc_overtime_reflexes(dec("2000"), dec("0.1"), dec("50"), 7).unwrap();

        assert_eq!(set.reflexes().len(), 8);
        assert_eq!(set.total_overtime_hours, dec("0.7"));
        let overtime_value = set.value_of(ReflexKind::OvertimeValue).unwrap();
        assert_eq!(overtime_value.round_dp(2), dec("9.55"));
        assert_eq!(set.monthly_average.round_dp(4), dec("1.3636"));

        let mut sum = Decimal::ZERO;
        for reflex in set.reflexes() {
            sum += reflex.item.value;
        }
        assert_eq!(set.total(), sum);

        let result = CalculationResult::try_from(set.clone()).unwrap();
        assert_eq!(result.total(), set.total());
    }

    #[test]
    fn test_salary_too_large_is_an_error() {
        let err =
            calc_overtime_reflexes(Decimal::MAX, dec("10"), dec("50"), 12).unwrap_err();
        assert!(matches!(err, EngineError::CalculationError { .. }));
    }

    #[test]
    fn test_zero_months_rejected() {
        let err = calc_overtime_reflexes(dec("2200"), dec("10"), dec("50"), 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_negative_hours_and_surcharge_rejected() {
        assert!(matches!(
            calc_overtime_reflexes(dec("2200"), dec("-1"), dec("50"), 12),
            Err(EngineError::InvalidInput { .. })
        ));
        assert!(matches!(
            calc_overtime_reflexes(dec("2200"), dec("10"), dec("-50"), 12),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_OVERTIME_SURCHARGE_PCT, dec("50"));
        assert_eq!(DEFAULT_MONTHS_WITH_OVERTIME, 12);
        assert_eq!(MONTHLY_HOURS_BASE, dec("220"));
    }
}
