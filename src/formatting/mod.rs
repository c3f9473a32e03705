//! Currency formatting for the settlement engine.
//!
//! Converts amounts into the Brazilian Real convention ("R$ 1.500,00") and,
//! optionally, appends the Portuguese written-out form used in petitions.

mod currency;
mod written_form;

pub use currency::{FormatConfig, format_amount, format_amount_with, round_to_cents};
pub use written_form::{WRITTEN_FORM_MAX, spell_out_amount};
