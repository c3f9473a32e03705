//! Overflow-checked `Decimal` arithmetic.
//!
//! The `Decimal` operators panic once a result leaves the 96-bit mantissa.
//! Salaries arrive from callers unchecked, so every calculation step goes
//! through these helpers and an overflow surfaces as
//! [`EngineError::CalculationError`].

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

fn overflow(operation: &str, lhs: Decimal, rhs: Decimal) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} of {} and {} is out of range", operation, lhs, rhs),
    }
}

pub(crate) fn add(lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| overflow("addition", lhs, rhs))
}

pub(crate) fn mul(lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| overflow("multiplication", lhs, rhs))
}

/// Division by zero is reported the same way as an overflow.
pub(crate) fn div(lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_div(rhs)
        .ok_or_else(|| overflow("division", lhs, rhs))
}

/// Sums left to right, stopping at the first overflow.
pub(crate) fn sum<I>(values: I) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, add)
}
