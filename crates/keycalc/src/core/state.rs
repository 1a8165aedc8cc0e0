//! Calculator display state

use crate::core::Operation;
use serde::{Deserialize, Serialize};

/// Everything a calculator front end renders
///
/// Owned by one front end and replaced wholesale on every transition. The
/// default value is the initial (and cleared) state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Operand being typed; `None` when empty
    pub current_operand: Option<String>,
    /// Left-hand operand once an operator is chosen
    pub previous_operand: Option<String>,
    /// Pending operator
    pub operation: Option<Operation>,
    /// Next digit replaces `current_operand` instead of appending
    #[serde(default)]
    pub overwrite: bool,
}

impl CalculatorState {
    /// Creates the initial, empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been entered
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }

    /// Current operand as a string slice
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current_operand.as_deref()
    }

    /// Previous operand as a string slice
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }

    /// Serializes the state to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a state from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
