//! The calculator state machine
//!
//! `reduce(state, action)` is total: every action either produces the next
//! state or hands the input state back unchanged. Nothing here panics or
//! returns an error.

use crate::core::action::{Action, Digit};
use crate::core::evaluator::evaluate;
use crate::core::state::CalculatorState;
use crate::core::Operation;
use serde::{Deserialize, Serialize};

/// Tunables for the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducerConfig {
    /// Digit entry is rejected once the current operand reaches this length
    pub max_operand_len: usize,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            max_operand_len: Self::DEFAULT_MAX_OPERAND_LEN,
        }
    }
}

impl ReducerConfig {
    /// Operand cap of the shared mobile package
    pub const DEFAULT_MAX_OPERAND_LEN: usize = 15;

    /// Operand cap of the web page
    pub const WEB_MAX_OPERAND_LEN: usize = 16;

    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration matching the web front end
    #[must_use]
    pub const fn web() -> Self {
        Self {
            max_operand_len: Self::WEB_MAX_OPERAND_LEN,
        }
    }

    /// Sets the operand length cap
    #[must_use]
    pub const fn with_max_operand_len(mut self, max_operand_len: usize) -> Self {
        self.max_operand_len = max_operand_len;
        self
    }
}

/// Computes the next state with the default configuration
///
/// ```
/// use keycalc::core::action::{Action, Digit};
/// use keycalc::core::reducer::reduce;
/// use keycalc::core::state::CalculatorState;
/// use keycalc::core::Operation;
///
/// let mut state = CalculatorState::new();
/// for action in [
///     Action::AddDigit(Digit::One),
///     Action::ChooseOperation(Operation::Add),
///     Action::AddDigit(Digit::Two),
///     Action::Evaluate,
/// ] {
///     state = reduce(state, action);
/// }
/// assert_eq!(state.current(), Some("3"));
/// assert!(state.overwrite);
/// ```
#[must_use]
pub fn reduce(state: CalculatorState, action: Action) -> CalculatorState {
    reduce_with(&ReducerConfig::default(), state, action)
}

/// Computes the next state
#[must_use]
pub fn reduce_with(
    config: &ReducerConfig,
    state: CalculatorState,
    action: Action,
) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(config, state, digit),
        Action::ChooseOperation(operation) => choose_operation(state, operation),
        Action::Clear => CalculatorState::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(config: &ReducerConfig, state: CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state
        };
    }

    if state
        .current()
        .is_some_and(|current| current.len() >= config.max_operand_len)
    {
        return state;
    }

    if digit.is_decimal() {
        if state.current().is_some_and(|current| current.contains('.')) {
            return state;
        }
        let current = format!("{}.", state.current().unwrap_or("0"));
        return CalculatorState {
            current_operand: Some(current),
            ..state
        };
    }

    if digit == Digit::Zero && state.current() == Some("0") {
        return state;
    }

    let current = format!("{}{}", state.current().unwrap_or_default(), digit.as_char());
    CalculatorState {
        current_operand: Some(current),
        ..state
    }
}

fn choose_operation(state: CalculatorState, operation: Operation) -> CalculatorState {
    match (state.current_operand.is_some(), state.previous_operand.is_some()) {
        (false, false) => state,
        // still waiting for the second operand: switch operator
        (false, true) => CalculatorState {
            operation: Some(operation),
            ..state
        },
        (true, false) => CalculatorState {
            previous_operand: state.current_operand,
            current_operand: None,
            operation: Some(operation),
            overwrite: state.overwrite,
        },
        (true, true) => CalculatorState {
            previous_operand: Some(evaluate(state.current(), state.previous(), state.operation)),
            current_operand: None,
            operation: Some(operation),
            overwrite: state.overwrite,
        },
    }
}

fn delete_digit(state: CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state
        };
    }

    let Some(current) = state.current().filter(|current| !current.is_empty()) else {
        return state;
    };

    let mut chars = current.chars();
    chars.next_back();
    let trimmed = chars.as_str();
    let current_operand = (!trimmed.is_empty()).then(|| trimmed.to_string());

    CalculatorState {
        current_operand,
        ..state
    }
}

fn evaluate_pending(state: CalculatorState) -> CalculatorState {
    let (Some(operation), Some(current), Some(previous)) =
        (state.operation, state.current(), state.previous())
    else {
        return state;
    };

    CalculatorState {
        current_operand: Some(evaluate(Some(current), Some(previous), Some(operation))),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}
