//! Expression evaluator for the calculator screen
//!
//! Wraps a [`CalcState`] with the per-button command interface the screen
//! calls, and keeps a history of completed operations.

use crate::core::history::History;
use crate::core::state::{Applied, CalcState};
use crate::core::{CalcError, Operation};
use crate::keypad::{Digit, Key};

/// Running-accumulator calculator driven by key presses
#[derive(Debug, Clone, Default)]
pub struct ExpressionEvaluator {
    state: CalcState,
    history: History,
    last_error: Option<CalcError>,
}

impl ExpressionEvaluator {
    /// Creates an evaluator in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator keeping at most `capacity` history entries
    #[must_use]
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            history: History::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Text currently on the display
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Snapshot of the full state
    #[must_use]
    pub const fn state(&self) -> &CalcState {
        &self.state
    }

    /// Completed operations
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Why the display shows the error marker, if it does
    #[must_use]
    pub const fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Empties the history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Feeds one key press
    pub fn press(&mut self, key: Key) {
        let state = std::mem::take(&mut self.state);
        let (state, applied) = state.step(key);
        self.state = state;

        if let Some(applied) = applied {
            self.record(applied);
        }
        if !self.state.is_error() {
            self.last_error = None;
        }

        tracing::debug!(
            key = %key,
            display = %self.state.display(),
            accumulator = ?self.state.accumulator(),
            pending = ?self.state.pending_operator(),
            "key pressed"
        );
    }

    fn record(&mut self, applied: Applied) {
        let expression = applied.expression();
        match applied.result {
            Ok(result) => {
                tracing::debug!(%expression, result, "operation applied");
                self.history.record(&expression, result);
            }
            Err(err) => {
                tracing::warn!(%expression, error = %err, "operation failed");
                self.last_error = Some(err);
            }
        }
    }

    /// Resets the calculator; history is kept
    pub fn clear(&mut self) {
        self.press(Key::Clear);
    }

    /// Enters a digit
    pub fn input_digit(&mut self, d: Digit) {
        self.press(Key::Digit(d));
    }

    /// Enters the decimal point
    pub fn input_decimal_point(&mut self) {
        self.press(Key::Decimal);
    }

    /// Selects a binary operator, applying any queued one first
    pub fn input_operator(&mut self, op: Operation) {
        self.press(Key::Operator(op));
    }

    /// Applies the queued operator
    pub fn input_equals(&mut self) {
        self.press(Key::Equals);
    }

    /// Negates the displayed value
    pub fn toggle_sign(&mut self) {
        self.press(Key::ToggleSign);
    }

    /// Divides the displayed value by 100
    pub fn to_percent(&mut self) {
        self.press(Key::Percent);
    }
}
