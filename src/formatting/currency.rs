//! Brazilian Real currency formatting.
//!
//! Amounts are rounded to the cent only here, at presentation time. The
//! calculators keep full precision so rounding never compounds across a
//! chain of derived values.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineResult, ensure_non_negative};

use super::written_form::spell_out_amount;

/// Separators and symbol used when rendering amounts.
///
/// Passed explicitly instead of relying on a process-wide locale.
///
/// # Example
///
/// ```
/// use verbas_engine::formatting::FormatConfig;
///
/// let config = FormatConfig::default();
/// assert_eq!(config.currency_symbol, "R$");
/// assert_eq!(config.thousands_separator, '.');
/// assert_eq!(config.decimal_separator, ',');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Prefix placed before the number, separated by a space.
    pub currency_symbol: String,
    /// Separator between groups of three integer digits.
    pub thousands_separator: char,
    /// Separator between the integer part and the cents.
    pub decimal_separator: char,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

/// Rounds an amount to whole cents, half away from zero.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as Brazilian Real using [`FormatConfig::default`].
///
/// When `include_written_form` is set, the Portuguese spellout of the amount
/// is appended in parentheses.
///
/// # Errors
///
/// - [`InvalidAmount`](crate::error::EngineError::InvalidAmount) for negative values
/// - [`UnsupportedRange`](crate::error::EngineError::UnsupportedRange) when the
///   written form is requested for one million or more
///
/// # Examples
///
/// ```
/// use verbas_engine::formatting::format_amount;
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::from(1500);
/// assert_eq!(format_amount(amount, false).unwrap(), "R$ 1.500,00");
/// assert_eq!(
///     format_amount(amount, true).unwrap(),
///     "R$ 1.500,00 (um mil e quinhentos reais)"
/// );
/// ```
pub fn format_amount(value: Decimal, include_written_form: bool) -> EngineResult<String> {
    format_amount_with(value, include_written_form, &FormatConfig::default())
}

/// Formats an amount using the given separators and symbol.
pub fn format_amount_with(
    value: Decimal,
    include_written_form: bool,
    config: &FormatConfig,
) -> EngineResult<String> {
    ensure_non_negative("amount", value)?;

    let rounded = round_to_cents(value);
    let digits = format!("{:.2}", rounded);
    let (integer_digits, cents_digits) = digits.split_once('.').unwrap_or((&digits, "00"));

    let formatted = format!(
        "{} {}{}{}",
        config.currency_symbol,
        group_thousands(integer_digits, config.thousands_separator),
        config.decimal_separator,
        cents_digits
    );

    if include_written_form {
        let written = spell_out_amount(value)?;
        Ok(format!("{} ({})", formatted, written))
    } else {
        Ok(formatted)
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
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
    fn test_formats_thousands_and_decimal_separators() {
        assert_eq!(format_amount(dec("1500.00"), false).unwrap(), "R$ 1.500,00");
        assert_eq!(
            format_amount(dec("1234567.891"), false).unwrap(),
            "R$ 1.234.567,89"
        );
        assert_eq!(format_amount(dec("999.9"), false).unwrap(), "R$ 999,90");
        assert_eq!(format_amount(dec("0"), false).unwrap(), "R$ 0,00");
    }

    #[test]
    fn test_rounds_half_away_from_zero_at_presentation() {
        assert_eq!(format_amount(dec("0.005"), false).unwrap(), "R$ 0,01");
        assert_eq!(format_amount(dec("2.675"), false).unwrap(), "R$ 2,68");
        assert_eq!(format_amount(dec("83.3333333"), false).unwrap(), "R$ 83,33");
    }

    #[test]
    fn test_rounding_carries_into_integer_part() {
        assert_eq!(format_amount(dec("999.999"), false).unwrap(), "R$ 1.000,00");
    }

    #[test]
    fn test_written_form_round_trip_sample() {
        assert_eq!(
            format_amount(dec("1500.00"), true).unwrap(),
            "R$ 1.500,00 (um mil e quinhentos reais)"
        );
    }

    #[test]
    fn test_singular_forms() {
        let one_real = format_amount(dec("1.00"), true).unwrap();
        assert!(one_real.contains("um real"));
        assert!(!one_real.contains("um reais"));

        let one_cent = format_amount(dec("0.01"), true).unwrap();
        assert!(one_cent.contains("um centavo"));
        assert!(!one_cent.contains("centavos"));
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let err = format_amount(dec("-1.00"), false).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount { .. }));
    }

    #[test]
    fn test_numeric_form_has_no_ceiling_but_written_form_does() {
        assert_eq!(
            format_amount(dec("1000000"), false).unwrap(),
            "R$ 1.000.000,00"
        );
        let err = format_amount(dec("1000000"), true).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedRange { .. }));
    }

    #[test]
    fn test_custom_format_config() {
        let config = FormatConfig {
            currency_symbol: "BRL".to_string(),
            thousands_separator: ' ',
            decimal_separator: '.',
        };
        assert_eq!(
            format_amount_with(dec("12345.6"), false, &config).unwrap(),
            "BRL 12 345.60"
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", '.'), "1");
        assert_eq!(group_thousands("123", '.'), "123");
        assert_eq!(group_thousands("1234", '.'), "1.234");
        assert_eq!(group_thousands("123456", '.'), "123.456");
        assert_eq!(group_thousands("1234567", '.'), "1.234.567");
    }
}
