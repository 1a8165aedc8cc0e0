//! Calculator core: evaluator, operand formatter and state reducer
//!
//! Everything in here is a pure function over plain data. Rejected input is
//! never an error at this level: the evaluator answers `""` and the reducer
//! hands the state back untouched. [`CalcError`] only exists for turning
//! loosely typed input (chars, symbols, key labels) into the typed model.

pub mod action;
pub mod evaluator;
pub mod format;
pub mod number;
mod operations;
pub mod reducer;
pub mod state;

pub use operations::Operation;

use thiserror::Error;

/// Result type for conversions into the typed calculator model
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while converting raw input into typed actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Input is not a single digit or decimal separator
    #[error("invalid digit: {0:?}")]
    InvalidDigit(String),
    /// Symbol is not one of `+ - * /`
    #[error("invalid operation: {0:?}")]
    InvalidOperation(String),
    /// Label does not match any keypad button
    #[error("unknown key: {0:?}")]
    UnknownKey(String),
    /// Action type identifier is not recognized
    #[error("unknown action: {0:?}")]
    UnknownAction(String),
    /// Action type needs a payload field that was not supplied
    #[error("{action} action is missing its {field} payload")]
    MissingPayload {
        /// Wire id of the action
        action: &'static str,
        /// Name of the missing payload field
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_invalid_digit() {
        let err = CalcError::InvalidDigit("x".into());
        assert_eq!(err.to_string(), "invalid digit: \"x\"");
    }

    #[test]
    fn test_calc_error_display_invalid_operation() {
        let err = CalcError::InvalidOperation("%".into());
        assert_eq!(err.to_string(), "invalid operation: \"%\"");
    }

    #[test]
    fn test_calc_error_display_unknown_key() {
        let err = CalcError::UnknownKey("MR".into());
        assert_eq!(err.to_string(), "unknown key: \"MR\"");
    }

    #[test]
    fn test_calc_error_display_unknown_action() {
        let err = CalcError::UnknownAction("undo".into());
        assert_eq!(err.to_string(), "unknown action: \"undo\"");
    }

    #[test]
    fn test_calc_error_display_missing_payload() {
        let err = CalcError::MissingPayload {
            action: "add-digit",
            field: "digit",
        };
        assert_eq!(err.to_string(), "add-digit action is missing its digit payload");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::InvalidDigit("?".into()));
        assert!(err.to_string().contains("digit"));
    }
}
