//! Néctar Calculator - keypad-driven calculator engine
//!
//! The calculator screen of the Néctar assistant is a classic four-function
//! calculator: each key press is one event, operands accumulate two at a
//! time, and the queued operator is applied as soon as the next operator or
//! `=` is pressed.
//!
//! # Example
//!
//! ```rust
//! use nectar_calc::prelude::*;
//!
//! let mut calc = ExpressionEvaluator::new();
//! calc.press_sequence("3 + 4 + 5 =").unwrap();
//! assert_eq!(calc.display(), "12");
//!
//! calc.press_sequence("÷ 0 =").unwrap();
//! assert_eq!(calc.display(), ERROR_MARKER);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::ExpressionEvaluator;
    pub use crate::core::format::{format_number, ERROR_MARKER};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::state::{CalcState, MAX_INPUT_DIGITS};
    pub use crate::core::{CalcError, CalcResult, Operation};
    pub use crate::driver::{CalculatorDriver, HistoryItem};
    pub use crate::keypad::{parse_keys, Digit, Key, Keypad, KeypadButton};
}
