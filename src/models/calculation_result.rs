//! Calculation result models for the settlement engine.
//!
//! This module contains the [`CalculationResult`] type and its line items.
//! Every calculator in [`crate::calculation`] produces one of these, and the
//! total of a result is always the exact sum of its own line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic;
use crate::error::EngineResult;
use crate::formatting::{FormatConfig, format_amount_with};

/// The kind of statutory amount a [`CalculationResult`] represents.
///
/// # Example
///
/// ```
/// use verbas_engine::models::CalculationKind;
///
/// let kind = CalculationKind::Fgts;
/// assert_eq!(format!("{:?}", kind), "Fgts");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    /// 13th salary (gratificação natalina).
    ThirteenthSalary,
    /// Expired and proportional vacation, each with the constitutional third.
    Vacation,
    /// FGTS deposits, optionally with the 40% termination penalty.
    Fgts,
    /// Overtime and its mandatory reflexes.
    OvertimeReflexes,
    /// Penalty for late payment of termination amounts.
    Penalty477,
    /// Penalty for non-payment of uncontested termination amounts.
    Penalty467,
}

impl CalculationKind {
    /// Returns the legal provision backing this kind of amount.
    pub fn legal_basis(&self) -> &'static str {
        match self {
            CalculationKind::ThirteenthSalary => "Lei 4.090/1962",
            CalculationKind::Vacation => "CLT, arts. 129 a 146; CF/88, art. 7º, XVII",
            CalculationKind::Fgts => "Lei 8.036/1990, arts. 15 e 18, §1º",
            CalculationKind::OvertimeReflexes => "CF/88, art. 7º, XVI; CLT, art. 59",
            CalculationKind::Penalty477 => {
                "CLT, art. 477, §8º (atraso no pagamento das verbas rescisórias)"
            }
            CalculationKind::Penalty467 => {
                "CLT, art. 467 (não pagamento de verbas rescisórias incontroversas)"
            }
        }
    }
}

/// A single itemized entry of a calculation.
///
/// # Example
///
/// ```
/// use verbas_engine::models::CalculationLineItem;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let item = CalculationLineItem::new(
///     "fgts_base",
///     "FGTS (8% sobre salário)",
///     "R$ 2.000,00 × 8% × 12 meses",
///     Decimal::from_str("1920").unwrap(),
/// );
/// assert_eq!(item.code, "fgts_base");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationLineItem {
    /// Stable machine identifier of the entry (e.g. `fgts_penalty`).
    pub code: String,
    /// Human-readable label, in Portuguese.
    pub label: String,
    /// How the value was obtained, e.g. `R$ 3.000,00 ÷ 12 × 6 meses`.
    pub formula_description: String,
    /// The unrounded amount.
    pub value: Decimal,
}

impl CalculationLineItem {
    /// Creates a new line item.
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        formula_description: impl Into<String>,
        value: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            formula_description: formula_description.into(),
            value,
        }
    }

    /// Formats the value as currency followed by its written-out form.
    pub fn formatted_value(&self, format: &FormatConfig) -> EngineResult<String> {
        format_amount_with(self.value, true, format)
    }
}

/// The result of one calculator: a total and its itemized breakdown.
///
/// The fields are private so the total can only come from
/// [`CalculationResult::from_items`]. The legal basis of the kind is
/// serialized alongside, so API consumers can cite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    kind: CalculationKind,
    legal_basis: &'static str,
    total: Decimal,
    line_items: Vec<CalculationLineItem>,
}

impl CalculationResult {
    /// Builds a result whose total is the sum of `line_items`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
    /// if the sum overflows.
    pub fn from_items(
        kind: CalculationKind,
        line_items: Vec<CalculationLineItem>,
    ) -> EngineResult<Self> {
        let total = arithmetic::sum(line_items.iter().map(|item| item.value))?;
        Ok(Self {
            kind,
            legal_basis: kind.legal_basis(),
            total,
            line_items,
        })
    }

    /// The kind of amount this result represents.
    pub fn kind(&self) -> CalculationKind {
        self.kind
    }

    /// The legal provision backing this result.
    pub fn legal_basis(&self) -> &'static str {
        self.legal_basis
    }

    /// The sum of all line item values.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// The line items, in the order the calculator produced them.
    pub fn line_items(&self) -> &[CalculationLineItem] {
        &self.line_items
    }

    /// Finds a line item by its code.
    pub fn item(&self, code: &str) -> Option<&CalculationLineItem> {
        self.line_items.iter().find(|item| item.code == code)
    }
}
