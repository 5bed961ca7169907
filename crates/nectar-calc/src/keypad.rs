//! Keypad input vocabulary and button layout
//!
//! `Key` is the set of events the evaluator understands. `Keypad` arranges
//! those keys on the calculator screen's grid:
//!
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```

use crate::core::{CalcError, CalcResult, Operation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A decimal digit, guaranteed to be in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, rejecting values above 9
    pub fn new(d: u8) -> CalcResult<Self> {
        if d <= 9 {
            Ok(Self(d))
        } else {
            Err(CalcError::InvalidDigit(d))
        }
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for the digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(d: u8) -> CalcResult<Self> {
        Self::new(d)
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> Self {
        d.0
    }
}

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Digit 0-9
    Digit(Digit),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operation),
    /// Apply the pending operator
    Equals,
    /// Reset everything
    Clear,
    /// Negate the displayed value
    ToggleSign,
    /// Divide the displayed value by 100
    Percent,
}

impl Key {
    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.as_char().to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let key = match s {
            "." | "," => Self::Decimal,
            "=" => Self::Equals,
            "C" | "c" | "AC" | "ac" => Self::Clear,
            "±" | "+/-" | "neg" => Self::ToggleSign,
            "%" => Self::Percent,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => {
                        if let Some(d) = ch.to_digit(10) {
                            Self::Digit(Digit::new(d as u8)?)
                        } else if let Some(op) = Operation::from_symbol(ch) {
                            Self::Operator(op)
                        } else {
                            return Err(CalcError::UnknownKey(s.to_string()));
                        }
                    }
                    _ => return Err(CalcError::UnknownKey(s.to_string())),
                }
            }
        };
        Ok(key)
    }
}

/// Parses whitespace-separated key labels.
///
/// A numeral such as `12.5` expands to one key per character, so typed
/// numbers need no spaces between digits. A numeral with more than one
/// decimal point is rejected as an unknown key.
pub fn parse_keys(input: &str) -> CalcResult<Vec<Key>> {
    let mut keys = Vec::new();
    for token in input.split_whitespace() {
        let is_numeral = token.len() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.');
        if is_numeral {
            if token.matches('.').count() > 1 {
                return Err(CalcError::UnknownKey(token.to_string()));
            }
            for ch in token.chars() {
                keys.push(ch.to_string().parse()?);
            }
        } else {
            keys.push(token.parse()?);
        }
    }
    Ok(keys)
}

/// A button on the keypad grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Key sent when the button is pressed
    pub key: Key,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column of the left edge (0-indexed)
    pub col: usize,
    /// Number of columns the button covers
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(key: Key, row: usize, col: usize) -> Self {
        Self {
            key,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    fn wide(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Whether the button covers grid cell `(row, col)`
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let d = |n: u8| Key::Digit(Digit(n));
        let op = Key::Operator;
        let buttons = vec![
            KeypadButton::new(Key::Clear, 0, 0),
            KeypadButton::new(Key::ToggleSign, 0, 1),
            KeypadButton::new(Key::Percent, 0, 2),
            KeypadButton::new(op(Operation::Divide), 0, 3),
            KeypadButton::new(d(7), 1, 0),
            KeypadButton::new(d(8), 1, 1),
            KeypadButton::new(d(9), 1, 2),
            KeypadButton::new(op(Operation::Multiply), 1, 3),
            KeypadButton::new(d(4), 2, 0),
            KeypadButton::new(d(5), 2, 1),
            KeypadButton::new(d(6), 2, 2),
            KeypadButton::new(op(Operation::Subtract), 2, 3),
            KeypadButton::new(d(1), 3, 0),
            KeypadButton::new(d(2), 3, 1),
            KeypadButton::new(d(3), 3, 2),
            KeypadButton::new(op(Operation::Add), 3, 3),
            KeypadButton::new(d(0), 4, 0).wide(2),
            KeypadButton::new(Key::Decimal, 4, 2),
            KeypadButton::new(Key::Equals, 4, 3),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds the button for a key
    #[must_use]
    pub fn find(&self, key: Key) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Highlights the button for `key`, clearing any previous highlight.
    /// Returns false if the key has no button.
    pub fn press(&mut self, key: Key) -> bool {
        let mut found = false;
        for button in &mut self.buttons {
            button.pressed = button.key == key;
            found |= button.pressed;
        }
        found
    }

    /// Clears all highlights
    pub fn release_all(&mut self) {
        for button in &mut self.buttons {
            button.pressed = false;
        }
    }

    /// The currently highlighted button
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Renders the grid as text, one line per row
    #[must_use]
    pub fn render(&self) -> String {
        const CELL: usize = 5;
        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let cells: Vec<String> = self
                .buttons
                .iter()
                .filter(|b| b.row == row)
                .map(|b| {
                    let width = CELL * b.span + (b.span - 1);
                    let label = if b.pressed {
                        format!("*{}*", b.key.label())
                    } else {
                        b.key.label()
                    };
                    format!("[{label:^inner$}]", inner = width - 2)
                })
                .collect();
            lines.push(cells.join(" "));
        }
        lines.join("\n")
    }
}
