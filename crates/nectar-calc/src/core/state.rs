//! Calculator state and its pure key transitions
//!
//! `CalcState` is a plain value. Each key press consumes the current state
//! and returns the next one, so the whole machine can be exercised without
//! any front end in the loop.

use crate::core::format::{digit_count, format_number, parse_display, ERROR_MARKER};
use crate::core::{CalcError, Operation};
use crate::keypad::{Digit, Key};
use serde::{Deserialize, Serialize};

/// Longest numeral a user can type, in digits
pub const MAX_INPUT_DIGITS: usize = 15;

/// Complete calculator state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcState {
    display: String,
    accumulator: Option<f64>,
    pending_operator: Option<Operation>,
    awaiting_fresh_input: bool,
}

/// An operator application performed during a transition
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    /// Left-hand operand (the accumulator)
    pub lhs: f64,
    /// Operator that was applied
    pub op: Operation,
    /// Right-hand operand (the display value)
    pub rhs: f64,
    /// Result, or the error that sent the calculator into its error state
    pub result: Result<f64, CalcError>,
}

impl Applied {
    /// Renders the operation as `lhs op rhs`
    #[must_use]
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            format_number(self.lhs),
            self.op.symbol(),
            format_number(self.rhs)
        )
    }
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    /// Initial state: display `0`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending_operator: None,
            awaiting_fresh_input: false,
        }
    }

    fn error() -> Self {
        Self {
            display: ERROR_MARKER.to_string(),
            accumulator: None,
            pending_operator: None,
            awaiting_fresh_input: true,
        }
    }

    /// Text currently shown on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Stored left-hand operand
    #[must_use]
    pub const fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    /// Operator queued for the next apply
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operation> {
        self.pending_operator
    }

    /// Whether the next digit starts a new numeral
    #[must_use]
    pub const fn awaiting_fresh_input(&self) -> bool {
        self.awaiting_fresh_input
    }

    /// Whether the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    /// Numeric value of the display; `None` in the error state
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        parse_display(&self.display)
    }

    /// Applies one key and returns the next state
    #[must_use]
    pub fn next(self, key: Key) -> Self {
        self.step(key).0
    }

    /// Applies one key, also reporting any operator application it caused
    #[must_use]
    pub fn step(self, key: Key) -> (Self, Option<Applied>) {
        match key {
            Key::Digit(d) => (self.input_digit(d), None),
            Key::Decimal => (self.input_decimal_point(), None),
            Key::Operator(op) => self.input_operator(op),
            Key::Equals => self.input_equals(),
            Key::Clear => (Self::new(), None),
            Key::ToggleSign => (self.toggle_sign(), None),
            Key::Percent => (self.to_percent(), None),
        }
    }

    fn starts_fresh(&self) -> bool {
        self.is_error() || self.awaiting_fresh_input
    }

    fn input_digit(mut self, d: Digit) -> Self {
        if self.starts_fresh() {
            // Leaving the error state drops whatever the error left behind.
            if self.is_error() {
                self = Self::new();
            }
            self.display = d.as_char().to_string();
            self.awaiting_fresh_input = false;
        } else if self.display == "0" {
            self.display = d.as_char().to_string();
        } else if digit_count(&self.display) < MAX_INPUT_DIGITS {
            self.display.push(d.as_char());
        } else {
            tracing::trace!(display = %self.display, "digit ignored, input full");
        }
        self
    }

    fn input_decimal_point(mut self) -> Self {
        if self.starts_fresh() {
            if self.is_error() {
                self = Self::new();
            }
            self.display = "0.".to_string();
            self.awaiting_fresh_input = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    fn input_operator(self, op: Operation) -> (Self, Option<Applied>) {
        if self.is_error() {
            return (Self::new(), None);
        }
        let Some(value) = self.value() else {
            return (Self::new(), None);
        };

        let (mut state, applied) = match (self.pending_operator, self.accumulator) {
            (Some(pending), Some(lhs)) if !self.awaiting_fresh_input => {
                Self::apply(lhs, pending, value)
            }
            _ => (
                Self {
                    accumulator: Some(value),
                    ..self
                },
                None,
            ),
        };

        if !state.is_error() {
            state.pending_operator = Some(op);
            state.awaiting_fresh_input = true;
        }
        (state, applied)
    }

    fn input_equals(self) -> (Self, Option<Applied>) {
        if self.is_error() {
            return (Self::new(), None);
        }
        match (self.pending_operator, self.accumulator, self.value()) {
            (Some(op), Some(lhs), Some(rhs)) => Self::apply(lhs, op, rhs),
            _ => (self, None),
        }
    }

    /// Negates the display value. The display is reformatted, so a numeral
    /// in progress loses a trailing decimal point (`5.` becomes `-5`).
    fn toggle_sign(self) -> Self {
        self.transform(|v| -v)
    }

    fn to_percent(self) -> Self {
        self.transform(|v| v / 100.0)
    }

    fn transform(mut self, f: impl FnOnce(f64) -> f64) -> Self {
        if let Some(value) = self.value() {
            self.display = format_number(f(value));
        }
        self
    }

    /// Applies `op` and builds the resulting state. The pending operator is
    /// always consumed.
    fn apply(lhs: f64, op: Operation, rhs: f64) -> (Self, Option<Applied>) {
        let result = op.apply(lhs, rhs);
        let state = match &result {
            Ok(value) => Self {
                display: format_number(*value),
                accumulator: Some(*value),
                pending_operator: None,
                awaiting_fresh_input: true,
            },
            Err(_) => Self::error(),
        };
        let applied = Applied {
            lhs,
            op,
            rhs,
            result,
        };
        (state, Some(applied))
    }
}
