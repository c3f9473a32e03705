//! Portuguese spellout of monetary amounts ("valor por extenso").
//!
//! Supports amounts up to R$ 999.999,99. Thousands follow the convention
//! used in filed petitions: exactly one thousand is "mil", any other
//! thousands group is spelled in full ("um mil e quinhentos").

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult, ensure_non_negative};

use super::currency::round_to_cents;

/// Largest amount that can be written out: R$ 999.999,99.
pub const WRITTEN_FORM_MAX: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

const UNITS: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];
const TEENS: [&str; 10] = [
    "dez", "onze", "doze", "treze", "quatorze", "quinze", "dezesseis", "dezessete", "dezoito",
    "dezenove",
];
const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];
const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Spells out an amount in Portuguese.
///
/// The amount is rounded to the cent first, so the words always match the
/// numeric form produced by [`format_amount`](super::format_amount).
///
/// # Errors
///
/// - [`EngineError::InvalidAmount`] for negative values
/// - [`EngineError::UnsupportedRange`] when the rounded amount exceeds
///   [`WRITTEN_FORM_MAX`]
///
/// # Examples
///
/// ```
/// use verbas_engine::formatting::spell_out_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(spell_out_amount(Decimal::ZERO).unwrap(), "zero reais");
/// assert_eq!(
///     spell_out_amount(Decimal::from_str("521.01").unwrap()).unwrap(),
///     "quinhentos e vinte e um reais e um centavo"
/// );
/// ```
pub fn spell_out_amount(value: Decimal) -> EngineResult<String> {
    ensure_non_negative("amount", value)?;

    let rounded = round_to_cents(value);
    if rounded > WRITTEN_FORM_MAX {
        return Err(EngineError::UnsupportedRange {
            value: rounded,
            max: WRITTEN_FORM_MAX,
        });
    }

    let reais = rounded.trunc().to_u32().ok_or_else(|| EngineError::CalculationError {
        message: format!("cannot split integer part of {}", rounded),
    })?;
    let centavos = (rounded.fract() * Decimal::ONE_HUNDRED)
        .to_u32()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("cannot split cents of {}", rounded),
        })?;

    if reais == 0 && centavos == 0 {
        return Ok("zero reais".to_string());
    }

    let mut parts = Vec::with_capacity(2);
    if reais > 0 {
        let unit = if reais == 1 { "real" } else { "reais" };
        parts.push(format!("{} {}", spell_integer(reais), unit));
    }
    if centavos > 0 {
        let unit = if centavos == 1 { "centavo" } else { "centavos" };
        parts.push(format!("{} {}", spell_below_thousand(centavos), unit));
    }

    Ok(parts.join(" e "))
}

/// Spells 1..=999_999.
fn spell_integer(n: u32) -> String {
    if n < 1000 {
        return spell_below_thousand(n);
    }

    let thousands = n / 1000;
    let remainder = n % 1000;

    let mut text = if thousands == 1 && remainder == 0 {
        "mil".to_string()
    } else {
        format!("{} mil", spell_below_thousand(thousands))
    };
    if remainder > 0 {
        text.push_str(" e ");
        text.push_str(&spell_below_thousand(remainder));
    }
    text
}

/// Spells 0..=999; zero yields an empty string.
fn spell_below_thousand(n: u32) -> String {
    let n = n as usize;
    match n {
        0 => String::new(),
        100 => "cem".to_string(),
        1..=9 => UNITS[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        20..=99 => {
            let (tens, units) = (n / 10, n % 10);
            if units > 0 {
                format!("{} e {}", TENS[tens], UNITS[units])
            } else {
                TENS[tens].to_string()
            }
        }
        _ => {
            let (hundreds, rest) = (n / 100, n % 100);
            if rest > 0 {
                format!("{} e {}", HUNDREDS[hundreds], spell_below_thousand(rest as u32))
            } else {
                HUNDREDS[hundreds].to_string()
            }
        }
    }
}
