//! keycalc - four-function calculator core
//!
//! The whole behavior of a pocket calculator as pure functions over plain
//! data, written once so every front end (web page, mobile app, terminal)
//! shares it:
//!
//! - [`core::reducer`]: `(state, action) -> state`, owning digit entry,
//!   operator chaining, delete, clear and evaluate rules
//! - [`core::evaluator`]: resolves `previous op current` over operand strings
//! - [`core::format`]: thousands grouping for display
//!
//! [`Session`] wraps a state for a front end and [`Keypad`] maps button
//! labels to actions.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut session = Session::new();
//! session.press_all(["1", "2", "0", "0", "*", "3", "="]).unwrap();
//!
//! assert_eq!(session.state().current(), Some("3600"));
//! assert_eq!(session.display().current.as_deref(), Some("3,600"));
//!
//! // The core functions are usable on their own
//! assert_eq!(evaluate(Some("2"), Some("3"), Some(Operation::Multiply)), "6");
//! assert_eq!(format_operand(Some("1234.5")).as_deref(), Some("1,234.5"));
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
pub mod keypad;
pub mod session;

pub use crate::core::action::{Action, ActionKind, Digit, RawAction, RawPayload};
pub use crate::core::evaluator::{evaluate, evaluate_symbol};
pub use crate::core::format::format_operand;
pub use crate::core::number::{number_to_string, parse_float};
pub use crate::core::reducer::{reduce, reduce_with, ReducerConfig};
pub use crate::core::state::CalculatorState;
pub use crate::core::{CalcError, CalcResult, Operation};
pub use keypad::{Keypad, KeypadButton};
pub use session::{Display, Session};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::action::{Action, ActionKind, Digit, RawAction};
    pub use crate::core::evaluator::evaluate;
    pub use crate::core::format::format_operand;
    pub use crate::core::reducer::{reduce, reduce_with, ReducerConfig};
    pub use crate::core::state::CalculatorState;
    pub use crate::core::{CalcError, CalcResult, Operation};
    pub use crate::keypad::Keypad;
    pub use crate::session::{Display, Session};
}
