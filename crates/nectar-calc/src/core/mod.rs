//! Core calculator engine
//!
//! The engine is a running-accumulator calculator: every binary operator
//! press applies the previously queued operator immediately, so there is
//! no operator precedence. `3 + 4 × 2 =` gives `14`, not `11`.

pub mod evaluator;
pub mod format;
pub mod history;
mod operations;
pub mod state;

pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Digit outside `0..=9`
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
    /// Key label that is not on the keypad
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
}

impl CalcError {
    /// Returns true for errors produced by arithmetic (these put the
    /// evaluator into its error state rather than reaching the caller)
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        assert_eq!(
            CalcError::Overflow.to_string(),
            "Overflow: result exceeds maximum value"
        );
    }

    #[test]
    fn test_calc_error_display_invalid_digit() {
        assert_eq!(CalcError::InvalidDigit(12).to_string(), "Invalid digit: 12");
    }

    #[test]
    fn test_calc_error_display_unknown_key() {
        let err = CalcError::UnknownKey("sqrt".into());
        assert_eq!(err.to_string(), "Unknown key: \"sqrt\"");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }

    #[test]
    fn test_is_arithmetic() {
        assert!(CalcError::DivisionByZero.is_arithmetic());
        assert!(CalcError::Overflow.is_arithmetic());
        assert!(!CalcError::InvalidDigit(10).is_arithmetic());
        assert!(!CalcError::UnknownKey("?".into()).is_arithmetic());
    }
}
