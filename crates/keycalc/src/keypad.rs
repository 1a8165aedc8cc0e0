//! Calculator keypad layout
//!
//! The button grid every front end draws, and the action each button
//! dispatches:
//!
//! ```text
//! [   AC    ] [DEL] [ / ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ . ] [    =    ]
//! ```

use crate::core::action::{Action, Digit};
use crate::core::{CalcError, CalcResult, Operation};

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: &'static str,
    /// Grid row
    pub row: usize,
    /// Leftmost grid column
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Action dispatched when pressed
    pub action: Action,
}

impl KeypadButton {
    const fn new(label: &'static str, row: usize, col: usize, action: Action) -> Self {
        Self {
            label,
            row,
            col,
            span: 1,
            action,
        }
    }

    const fn wide(mut self) -> Self {
        self.span = 2;
        self
    }

    const fn digit(label: &'static str, row: usize, col: usize, digit: Digit) -> Self {
        Self::new(label, row, col, Action::AddDigit(digit))
    }

    const fn operator(row: usize, operation: Operation) -> Self {
        Self::new(operation.symbol(), row, 3, Action::ChooseOperation(operation))
    }

    /// True when the button covers `(row, col)`
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// The standard five-row calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of grid rows
    pub const ROWS: usize = 5;
    /// Number of grid columns
    pub const COLS: usize = 4;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: AC DEL /
            KeypadButton::new("AC", 0, 0, Action::Clear).wide(),
            KeypadButton::new("DEL", 0, 2, Action::DeleteDigit),
            KeypadButton::operator(0, Operation::Divide),
            // Row 1: 7 8 9 *
            KeypadButton::digit("7", 1, 0, Digit::Seven),
            KeypadButton::digit("8", 1, 1, Digit::Eight),
            KeypadButton::digit("9", 1, 2, Digit::Nine),
            KeypadButton::operator(1, Operation::Multiply),
            // Row 2: 4 5 6 +
            KeypadButton::digit("4", 2, 0, Digit::Four),
            KeypadButton::digit("5", 2, 1, Digit::Five),
            KeypadButton::digit("6", 2, 2, Digit::Six),
            KeypadButton::operator(2, Operation::Add),
            // Row 3: 1 2 3 -
            KeypadButton::digit("1", 3, 0, Digit::One),
            KeypadButton::digit("2", 3, 1, Digit::Two),
            KeypadButton::digit("3", 3, 2, Digit::Three),
            KeypadButton::operator(3, Operation::Subtract),
            // Row 4: 0 . =
            KeypadButton::digit("0", 4, 0, Digit::Zero),
            KeypadButton::digit(".", 4, 1, Digit::Decimal),
            KeypadButton::new("=", 4, 2, Action::Evaluate).wide(),
        ];

        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by label
    ///
    /// Case-insensitive; also accepts common aliases (`C`, `CLEAR`, `BS`,
    /// `BACKSPACE`, `x`, `×`, `÷`, `ENTER`, `,`).
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&KeypadButton> {
        let label = label.trim().to_ascii_uppercase();
        let canonical = match label.as_str() {
            "C" | "CLEAR" | "ESC" => "AC",
            "BS" | "BACKSPACE" | "⌫" => "DEL",
            "X" | "×" => "*",
            "÷" => "/",
            "ENTER" | "RETURN" => "=",
            "," => ".",
            other => other,
        };
        self.buttons.iter().find(|b| b.label == canonical)
    }

    /// Resolves a label to the action its button dispatches
    pub fn action_for(&self, label: &str) -> CalcResult<Action> {
        self.find(label)
            .map(|b| b.action)
            .ok_or_else(|| CalcError::UnknownKey(label.to_string()))
    }
}
