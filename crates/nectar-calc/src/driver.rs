//! Uniform driver over calculator front ends
//!
//! Any front end that can press keys and report its display implements
//! [`CalculatorDriver`]; the `verify_*` functions then run the same checks
//! against all of them.

use crate::core::evaluator::ExpressionEvaluator;
use crate::core::format::ERROR_MARKER;
use crate::core::CalcResult;
use crate::keypad::{parse_keys, Key};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, key: Key);

    /// Gets the current display text
    fn display(&self) -> String;

    /// Resets the calculator
    fn clear(&mut self);

    /// Gets history entries (newest first)
    fn history(&self) -> Vec<HistoryItem>;

    /// Presses whitespace-separated key labels in order, e.g. `"12 + 3 ="`.
    ///
    /// Nothing is pressed if any label is unknown.
    fn press_sequence(&mut self, labels: &str) -> CalcResult<()> {
        for key in parse_keys(labels)? {
            self.press(key);
        }
        Ok(())
    }
}

/// A history line as reported by a driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// The operation, e.g. `3 + 4`
    pub expression: String,
    /// The formatted result
    pub result: String,
}

impl CalculatorDriver for ExpressionEvaluator {
    fn press(&mut self, key: Key) {
        Self::press(self, key);
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn history(&self) -> Vec<HistoryItem> {
        Self::history(self)
            .iter_rev()
            .map(|entry| HistoryItem {
                expression: entry.expression.clone(),
                result: crate::core::format::format_number(entry.result),
            })
            .collect()
    }
}

// ===== Shared checks =====

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    for (keys, expected) in [
        ("2 + 3 =", "5"),
        ("10 - 4 =", "6"),
        ("6 × 7 =", "42"),
        ("20 ÷ 4 =", "5"),
        ("7 ÷ 2 =", "3.5"),
    ] {
        driver.clear();
        driver.press_sequence(keys)?;
        assert_eq!(driver.display(), expected, "{keys}");
    }
    driver.clear();
    Ok(())
}

/// Verifies that operators apply left to right as they are pressed
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_sequence("3 + 4 +")?;
    assert_eq!(driver.display(), "7");
    driver.press_sequence("5 =")?;
    assert_eq!(driver.display(), "12");

    driver.clear();
    driver.press_sequence("2 + 3 × 4 =")?;
    assert_eq!(driver.display(), "20");
    driver.clear();
    Ok(())
}

/// Verifies the error state and the ways out of it
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_sequence("1 0 ÷ 0 =")?;
    assert_eq!(driver.display(), ERROR_MARKER);
    driver.press_sequence("8")?;
    assert_eq!(driver.display(), "8");

    driver.press_sequence("÷ 0 = +")?;
    assert_eq!(driver.display(), "0");

    driver.press_sequence("5 ÷ 0 = .")?;
    assert_eq!(driver.display(), "0.");
    driver.clear();
    Ok(())
}
