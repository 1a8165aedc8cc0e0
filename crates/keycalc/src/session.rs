//! A calculator instance as a front end holds it
//!
//! [`Session`] owns the current [`CalculatorState`], feeds actions through the
//! reducer and logs every transition with `tracing`. Front ends render from
//! [`Session::display`].

use crate::core::action::{Action, RawAction};
use crate::core::format::format_operand;
use crate::core::reducer::{reduce_with, ReducerConfig};
use crate::core::state::CalculatorState;
use crate::core::CalcResult;
use crate::keypad::Keypad;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The two display lines of a calculator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    /// Formatted previous operand followed by the pending operator
    pub previous: Option<String>,
    /// Formatted current operand
    pub current: Option<String>,
}

impl Display {
    /// Builds the display lines for a state
    #[must_use]
    pub fn from_state(state: &CalculatorState) -> Self {
        let previous = match (format_operand(state.previous()), state.operation) {
            (Some(operand), Some(op)) => Some(format!("{operand} {op}")),
            (Some(operand), None) => Some(operand),
            (None, Some(op)) => Some(op.to_string()),
            (None, None) => None,
        };

        Self {
            previous,
            current: format_operand(state.current()),
        }
    }
}

/// One calculator: state, reducer configuration and keypad
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: ReducerConfig,
    state: CalculatorState,
    keypad: Keypad,
}

impl Session {
    /// Creates a session in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a custom reducer configuration
    #[must_use]
    pub fn with_config(config: ReducerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Reducer configuration
    #[must_use]
    pub fn config(&self) -> &ReducerConfig {
        &self.config
    }

    /// Keypad used by [`Session::press`]
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns to the initial state, keeping the configuration
    pub fn reset(&mut self) {
        self.state = CalculatorState::default();
    }

    /// Applies an action and returns the new state
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let prev = std::mem::take(&mut self.state);
        let next = reduce_with(&self.config, prev.clone(), action);

        if next == prev {
            trace!(%action, "action rejected, state unchanged");
        } else {
            debug!(
                %action,
                current = next.current().unwrap_or_default(),
                previous = next.previous().unwrap_or_default(),
                operation = next.operation.map(|op| op.symbol()).unwrap_or_default(),
                overwrite = next.overwrite,
                "state transition"
            );
        }

        self.state = next;
        &self.state
    }

    /// Applies a loosely typed action
    ///
    /// Unknown types and malformed payloads leave the state unchanged.
    pub fn dispatch_raw(&mut self, raw: &RawAction) -> &CalculatorState {
        match raw.to_action() {
            Ok(action) => self.dispatch(action),
            Err(err) => {
                debug!(kind = %raw.kind, error = %err, "ignoring raw action");
                &self.state
            }
        }
    }

    /// Presses the keypad button with the given label
    pub fn press(&mut self, label: &str) -> CalcResult<&CalculatorState> {
        let action = self.keypad.action_for(label)?;
        Ok(self.dispatch(action))
    }

    /// Presses a sequence of keypad buttons, stopping at the first unknown label
    pub fn press_all<I, S>(&mut self, labels: I) -> CalcResult<&CalculatorState>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.press(label.as_ref())?;
        }
        Ok(&self.state)
    }

    /// Display lines for the current state
    #[must_use]
    pub fn display(&self) -> Display {
        Display::from_state(&self.state)
    }
}
