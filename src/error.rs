//! Error types for the settlement calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a calculation, formatting pass or configuration load
//! can produce.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the settlement calculation engine.
///
/// Every calculator returns this error type. A failed calculation is never
/// replaced by a zero amount: the caller decides what to do with the error.
///
/// # Example
///
/// ```
/// use verbas_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A negative monetary value was supplied.
    #[error("Invalid amount for '{field}': {value} (amounts cannot be negative)")]
    InvalidAmount {
        /// The name of the offending input.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// An input was outside the range a calculator accepts.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The name of the offending input.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// The written-out form was requested for a value it cannot spell.
    #[error("Amount {value} is outside the supported range for written form (max {max})")]
    UnsupportedRange {
        /// The rejected value.
        value: Decimal,
        /// The largest value that can be written out.
        max: Decimal,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidInput`] for the named field.
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Rejects negative amounts with [`EngineError::InvalidAmount`].
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_amount_displays_field_and_value() {
        let error = EngineError::InvalidAmount {
            field: "monthly_salary".to_string(),
            value: Decimal::from_str("-10.50").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid amount for 'monthly_salary': -10.50 (amounts cannot be negative)"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::invalid_input("months_with_overtime", "must be greater than zero");
        assert_eq!(
            error.to_string(),
            "Invalid input 'months_with_overtime': must be greater than zero"
        );
    }

    #[test]
    fn test_unsupported_range_displays_value_and_ceiling() {
        let error = EngineError::UnsupportedRange {
            value: Decimal::from_str("1000000.00").unwrap(),
            max: Decimal::from_str("999999.99").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Amount 1000000.00 is outside the supported range for written form (max 999999.99)"
        );
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("x", Decimal::ZERO).is_ok());
        assert!(ensure_non_negative("x", Decimal::from_str("0.01").unwrap()).is_ok());
        assert!(matches!(
            ensure_non_negative("x", Decimal::from_str("-0.01").unwrap()),
            Err(EngineError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::invalid_input("months", "out of range"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
