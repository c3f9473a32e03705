//! Overtime reflex models.
//!
//! Labor doctrine speaks of the "7 reflexes" of overtime, numbered 1 to 6
//! with the vacation and FGTS reflexes each split into a base and a derived
//! entry. The data therefore always holds 8 entries. [`ReflexKind`] gives
//! each entry its own identifier while keeping the legal number used in
//! rendered statements.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic;
use crate::error::{EngineError, EngineResult};

use super::{CalculationKind, CalculationLineItem, CalculationResult};

/// Identifies one entry of an [`OvertimeReflexSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflexKind {
    /// The overtime hours themselves.
    OvertimeValue,
    /// Weekly paid rest (DSR) over overtime.
    WeeklyRest,
    /// Reflex on the 13th salary.
    ThirteenthSalary,
    /// Reflex on vacation pay.
    Vacation,
    /// Reflex on the constitutional vacation third.
    VacationThird,
    /// Reflex on FGTS deposits.
    Fgts,
    /// Reflex on the 40% FGTS penalty.
    FgtsPenalty,
    /// Reflex on the notice period.
    NoticePeriod,
}

impl ReflexKind {
    /// All entries, in the order they appear in a reflex set.
    pub const ALL: [ReflexKind; 8] = [
        ReflexKind::OvertimeValue,
        ReflexKind::WeeklyRest,
        ReflexKind::ThirteenthSalary,
        ReflexKind::Vacation,
        ReflexKind::VacationThird,
        ReflexKind::Fgts,
        ReflexKind::FgtsPenalty,
        ReflexKind::NoticePeriod,
    ];

    /// The legal reflex number. Derived entries share the number of their base.
    pub fn legal_number(&self) -> u8 {
        match self {
            ReflexKind::OvertimeValue => 1,
            ReflexKind::WeeklyRest => 2,
            ReflexKind::ThirteenthSalary => 3,
            ReflexKind::Vacation | ReflexKind::VacationThird => 4,
            ReflexKind::Fgts | ReflexKind::FgtsPenalty => 5,
            ReflexKind::NoticePeriod => 6,
        }
    }

    /// The line item code used for this entry.
    pub fn code(&self) -> &'static str {
        match self {
            ReflexKind::OvertimeValue => "overtime_value",
            ReflexKind::WeeklyRest => "overtime_dsr",
            ReflexKind::ThirteenthSalary => "overtime_reflex_thirteenth",
            ReflexKind::Vacation => "overtime_reflex_vacation",
            ReflexKind::VacationThird => "overtime_reflex_vacation_third",
            ReflexKind::Fgts => "overtime_reflex_fgts",
            ReflexKind::FgtsPenalty => "overtime_reflex_fgts_penalty",
            ReflexKind::NoticePeriod => "overtime_reflex_notice",
        }
    }

    /// Looks up the entry kind for a line item code.
    pub fn from_code(code: &str) -> Option<ReflexKind> {
        ReflexKind::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

/// One entry of an [`OvertimeReflexSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeReflex {
    /// Which reflex this is.
    pub kind: ReflexKind,
    /// The computed line item.
    pub item: CalculationLineItem,
}

/// Overtime value plus every reflex, with the rates used to compute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OvertimeReflexSet {
    /// Monthly salary divided by the 220-hour base.
    pub normal_hourly_rate: Decimal,
    /// Normal hourly rate with the overtime surcharge applied.
    pub overtime_hourly_rate: Decimal,
    /// Overtime hours across all months.
    pub total_overtime_hours: Decimal,
    /// Overtime value divided by the months with overtime.
    pub monthly_average: Decimal,
    reflexes: Vec<OvertimeReflex>,
    total: Decimal,
}

impl OvertimeReflexSet {
    pub(crate) fn new(
        normal_hourly_rate: Decimal,
        overtime_hourly_rate: Decimal,
        total_overtime_hours: Decimal,
        monthly_average: Decimal,
        reflexes: Vec<OvertimeReflex>,
    ) -> EngineResult<Self> {
        let total = arithmetic::sum(reflexes.iter().map(|r| r.item.value))?;
        Ok(Self {
            normal_hourly_rate,
            overtime_hourly_rate,
            total_overtime_hours,
            monthly_average,
            reflexes,
            total,
        })
    }

    /// The entries, in [`ReflexKind::ALL`] order.
    pub fn reflexes(&self) -> &[OvertimeReflex] {
        &self.reflexes
    }

    /// Sum of every entry.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Value of a single entry.
    pub fn value_of(&self, kind: ReflexKind) -> Option<Decimal> {
        self.reflexes
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| r.item.value)
    }
}

impl TryFrom<OvertimeReflexSet> for CalculationResult {
    type Error = EngineError;

    fn try_from(set: OvertimeReflexSet) -> EngineResult<Self> {
        CalculationResult::from_items(
            CalculationKind::OvertimeReflexes,
            set.reflexes.into_iter().map(|r| r.item).collect(),
        )
    }
}
