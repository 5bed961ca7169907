//! Binary operations applied by the evaluator

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operations in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parses an operator symbol, accepting ASCII spellings as well
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' | 'x' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to `a` (accumulator) and `b` (entered value)
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "×");
        assert_eq!(Operation::Divide.symbol(), "÷");
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(format!("{}", Operation::Divide), "÷");
    }

    #[test]
    fn test_from_symbol_ascii_and_unicode() {
        assert_eq!(Operation::from_symbol('+'), Some(Operation::Add));
        assert_eq!(Operation::from_symbol('-'), Some(Operation::Subtract));
        assert_eq!(Operation::from_symbol('*'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('x'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('×'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('/'), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol('÷'), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol('^'), None);
    }

    #[test]
    fn test_symbol_round_trips() {
        for op in Operation::ALL {
            let ch = op.symbol().chars().next().unwrap();
            assert_eq!(Operation::from_symbol(ch), Some(op));
        }
    }

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operation::Add.apply(3.0, 4.0), Ok(7.0));
        assert_eq!(Operation::Subtract.apply(3.0, 4.0), Ok(-1.0));
        assert_eq!(Operation::Multiply.apply(3.0, 4.0), Ok(12.0));
        assert_eq!(Operation::Divide.apply(3.0, 4.0), Ok(0.75));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(10.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operation::Divide.apply(0.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            Operation::Multiply.apply(f64::MAX, 10.0),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operation::Add.apply(f64::MAX, f64::MAX),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Operation::Multiply).unwrap();
        assert_eq!(json, "\"Multiply\"");
    }
}
