//! Plain-text statement of a [`CaseReport`].
//!
//! The layout is embedded verbatim into generated petitions, so the section
//! markers and the 60-character banner must not change.

use rust_decimal::Decimal;

use crate::arithmetic;
use crate::error::{EngineError, EngineResult};
use crate::formatting::{FormatConfig, format_amount_with, round_to_cents};
use crate::models::{CalculationKind, CalculationLineItem, CaseReport, ReflexKind};

/// Heading that opens every statement.
pub const STATEMENT_HEADING: &str = "DISCRIMINAÇÃO DOS VALORES:";

/// Width of the banner around the grand total.
pub const BANNER_WIDTH: usize = 60;

/// Renders a statement using [`FormatConfig::default`].
///
/// # Examples
///
/// ```
/// use verbas_engine::calculation::calc_penalty_467;
/// use verbas_engine::models::CaseReport;
/// use verbas_engine::report::render_report;
/// use rust_decimal::Decimal;
///
/// let mut report = CaseReport::new();
/// report.insert("Multa do Art. 467", calc_penalty_467(Decimal::from(1000)).unwrap());
///
/// let text = render_report(&report).unwrap();
/// assert!(text.contains("MULTA DO ART. 467:"));
/// assert!(text.contains("TOTAL GERAL: R$ 500,00 (quinhentos reais)"));
/// ```
pub fn render_report(report: &CaseReport) -> EngineResult<String> {
    render_report_with(report, &FormatConfig::default())
}

/// Renders a statement with the given currency format.
///
/// Categories appear in insertion order with their label uppercased. Every
/// line item shows its formatted value and its formula. The grand total is
/// accumulated from the line items and must agree, to the cent, with the
/// report's sum of category totals.
///
/// # Errors
///
/// Any formatting failure aborts the render, as does a disagreement between
/// the two totals ([`EngineError::CalculationError`]).
pub fn render_report_with(report: &CaseReport, format: &FormatConfig) -> EngineResult<String> {
    let mut text = format!("\n\n{}\n\n", STATEMENT_HEADING);
    let mut grand_total = Decimal::ZERO;

    for section in report.sections() {
        text.push_str(&format!("\n{}:\n", section.label.to_uppercase()));

        let numbered = section.result.kind() == CalculationKind::OvertimeReflexes;
        for item in section.result.line_items() {
            text.push_str(&render_item(item, numbered, format)?);
            grand_total = arithmetic::add(grand_total, item.value)?;
        }
    }

    ensure_totals_agree(grand_total, report.grand_total()?)?;

    let banner = "=".repeat(BANNER_WIDTH);
    text.push_str(&format!(
        "\n{}\nTOTAL GERAL: {}\n{}\n",
        banner,
        format_amount_with(grand_total, true, format)?,
        banner
    ));

    Ok(text)
}

/// Summation order differs, so the last digits may too; cents must not.
fn ensure_totals_agree(line_items_total: Decimal, category_total: Decimal) -> EngineResult<()> {
    if round_to_cents(line_items_total) != round_to_cents(category_total) {
        return Err(EngineError::CalculationError {
            message: format!(
                "line items sum to {} but categories sum to {}",
                line_items_total, category_total
            ),
        });
    }
    Ok(())
}

fn render_item(
    item: &CalculationLineItem,
    numbered: bool,
    format: &FormatConfig,
) -> EngineResult<String> {
    let value = item.formatted_value(format)?;
    let reflex = if numbered {
        ReflexKind::from_code(&item.code)
    } else {
        None
    };

    Ok(match reflex {
        Some(kind) => format!(
            "  {}. {}: {}\n     Cálculo: {}\n",
            kind.legal_number(),
            item.label,
            value,
            item.formula_description
        ),
        None => format!(
            "  • {}: {}\n    Cálculo: {}\n",
            item.label, value, item.formula_description
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{
        calc_fgts, calc_overtime_reflexes, calc_penalty_477, calc_thirteenth, calc_vacation,
    };
    use crate::models::CalculationResult;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_exact_layout_for_single_category() {
        let mut report = CaseReport::new();
        report.insert("FGTS", calc_fgts(dec("2000"), 12, true).unwrap());

        let banner = "=".repeat(60);
        let expected = format!(
            "\n\nDISCRIMINAÇÃO DOS VALORES:\n\n\
             \nFGTS:\n\
             \x20 • FGTS (8% sobre salário): R$ 1.920,00 (um mil e novecentos e vinte reais)\n\
             \x20   Cálculo: R$ 2.000,00 × 8% × 12 meses\n\
             \x20 • Multa de 40% sobre FGTS: R$ 768,00 (setecentos e sessenta e oito reais)\n\
             \x20   Cálculo: R$ 1.920,00 × 40%\n\
             \n{banner}\n\
             TOTAL GERAL: R$ 2.688,00 (dois mil e seiscentos e oitenta e oito reais)\n\
             {banner}\n"
        );

        assert_eq!(render_report(&report).unwrap(), expected);
    }

    #[test]
    fn test_overtime_entries_use_legal_numbers() {
        let mut report = CaseReport::new();
        let set = calc_overtime_reflexes(dec("2200"), dec("10"), dec("50"), 12).unwrap();
        report.insert("Horas Extras e Reflexos", CalculationResult::try_from(set).unwrap());

        let text = render_report(&report).unwrap();
        assert!(text.contains("\nHORAS EXTRAS E REFLEXOS:\n"));
        assert!(text.contains("  1. Horas Extras (50%): R$ 1.800,00"));
        assert!(text.contains("     Cálculo: 120h × R$ 15,00\n"));
        assert!(text.contains("  4. Reflexos em Férias: R$ 150,00"));
        assert!(text.contains("  4. Reflexos em 1/3 de Férias: R$ 50,00"));
        assert!(text.contains("  5. Reflexos em Multa 40% FGTS: R$ 67,20"));
        assert!(text.contains("  6. Reflexos em Aviso Prévio: R$ 150,00"));
        assert!(!text.contains("•"));
        assert!(text.contains("TOTAL GERAL: R$ 2.835,20"));
    }

    #[test]
    fn test_categories_in_insertion_order_and_totals_agree() {
        let mut report = CaseReport::new();
        report.insert("Multa do Art. 477", calc_penalty_477(dec("3500")).unwrap());
        report.insert("13º Salário", calc_thirteenth(dec("3000"), 6, true).unwrap());
        report.insert("Férias", calc_vacation(dec("3000"), 12, 1, 6).unwrap());

        let text = render_report(&report).unwrap();
        let penalty = text.find("MULTA DO ART. 477:").unwrap();
        let thirteenth = text.find("13º SALÁRIO:").unwrap();
        let vacation = text.find("FÉRIAS:").unwrap();
        assert!(penalty < thirteenth && thirteenth < vacation);

        // 3500 + 1500 + 6000
        assert_eq!(report.grand_total().unwrap(), dec("11000"));
        assert!(text.contains("TOTAL GERAL: R$ 11.000,00 (onze mil reais)"));
    }

    #[test]
    fn test_empty_report_renders_zero_total() {
        let text = render_report(&CaseReport::new()).unwrap();
        assert!(text.starts_with("\n\nDISCRIMINAÇÃO DOS VALORES:\n\n"));
        assert!(text.contains("TOTAL GERAL: R$ 0,00 (zero reais)"));
    }

    #[test]
    fn test_grand_total_beyond_written_range_fails() {
        let mut report = CaseReport::new();
        report.insert(
            "Multa do Art. 477",
            calc_penalty_477(dec("600000")).unwrap(),
        );
        report.insert(
            "Multa do Art. 477 (2)",
            calc_penalty_477(dec("600000")).unwrap(),
        );

        let err = render_report(&report).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedRange { .. }));
    }

    #[test]
    fn test_empty_category_renders_heading_only() {
        let mut report = CaseReport::new();
        report.insert(
            "Férias",
            CalculationResult::from_items(CalculationKind::Vacation, vec![]).unwrap(),
        );
        let text = render_report(&report).unwrap();
        assert!(text.contains("\nFÉRIAS:\n\n===="));
    }

    #[test]
    fn test_totals_disagreeing_at_the_cent_fail() {
        let err = ensure_totals_agree(dec("10.00"), dec("10.01")).unwrap_err();
        assert!(matches!(err, EngineError::CalculationError { .. }));
        assert!(err.to_string().contains("10.01"));
    }

    #[test]
    fn test_totals_differing_below_the_cent_agree() {
        assert!(ensure_totals_agree(dec("10.0000000001"), dec("10")).is_ok());
        assert!(ensure_totals_agree(dec("3333.3333333333"), dec("3333.333333333")).is_ok());
    }
}
