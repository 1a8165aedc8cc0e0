//! User intents consumed by the reducer
//!
//! [`Action`] is the typed form: each variant carries exactly the payload it
//! needs. [`RawAction`] is the loose `{ type, payload }` shape front ends send
//! over a JSON boundary; converting it is where unknown types and bad
//! payloads get caught.

use crate::core::{CalcError, CalcResult, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A digit key: `0`-`9` or the decimal separator
///
/// Both `.` and `,` parse to [`Digit::Decimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Digit {
    /// 0
    Zero,
    /// 1
    One,
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// Decimal separator
    Decimal,
}

impl Digit {
    /// The ten numeric digits in ascending order
    pub const NUMERIC: [Self; 10] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
    ];

    /// Builds a numeric digit from its value
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::NUMERIC.get(usize::from(value)).copied()
    }

    /// Character appended to the operand
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Decimal => '.',
        }
    }

    /// True for the decimal separator
    #[must_use]
    pub const fn is_decimal(self) -> bool {
        matches!(self, Self::Decimal)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        match c {
            '.' | ',' => Ok(Self::Decimal),
            '0'..='9' => Ok(Self::NUMERIC[(c as u8 - b'0') as usize]),
            _ => Err(CalcError::InvalidDigit(c.to_string())),
        }
    }
}

impl FromStr for Digit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(CalcError::InvalidDigit(s.to_string())),
        }
    }
}

impl TryFrom<String> for Digit {
    type Error = CalcError;

    fn try_from(s: String) -> CalcResult<Self> {
        s.parse()
    }
}

impl From<Digit> for String {
    fn from(digit: Digit) -> Self {
        digit.as_char().to_string()
    }
}

/// Closed set of action type identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    /// ADD_DIGIT
    AddDigit,
    /// CHOOSE_OPERATION
    ChooseOperation,
    /// CLEAR
    Clear,
    /// DELETE_DIGIT
    DeleteDigit,
    /// EVALUATE
    Evaluate,
}

impl ActionKind {
    /// Every action kind
    pub const ALL: [Self; 5] = [
        Self::AddDigit,
        Self::ChooseOperation,
        Self::Clear,
        Self::DeleteDigit,
        Self::Evaluate,
    ];

    /// Wire identifier, e.g. `add-digit`
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::AddDigit => "add-digit",
            Self::ChooseOperation => "choose-operation",
            Self::Clear => "clear",
            Self::DeleteDigit => "delete-digit",
            Self::Evaluate => "evaluate",
        }
    }

    /// Constant name, e.g. `ADD_DIGIT`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AddDigit => "ADD_DIGIT",
            Self::ChooseOperation => "CHOOSE_OPERATION",
            Self::Clear => "CLEAR",
            Self::DeleteDigit => "DELETE_DIGIT",
            Self::Evaluate => "EVALUATE",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionKind {
    type Err = CalcError;

    /// Accepts either the wire id or the constant name
    fn from_str(s: &str) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s || kind.name() == s)
            .ok_or_else(|| CalcError::UnknownAction(s.to_string()))
    }
}

/// A single user intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Append a digit or the decimal separator to the current operand
    AddDigit(Digit),
    /// Pick the pending operator
    ChooseOperation(Operation),
    /// Reset everything
    Clear,
    /// Remove the last character of the current operand
    DeleteDigit,
    /// Resolve the pending operation
    Evaluate,
}

impl Action {
    /// The identifier of this action's type
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::AddDigit(_) => ActionKind::AddDigit,
            Self::ChooseOperation(_) => ActionKind::ChooseOperation,
            Self::Clear => ActionKind::Clear,
            Self::DeleteDigit => ActionKind::DeleteDigit,
            Self::Evaluate => ActionKind::Evaluate,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddDigit(digit) => write!(f, "{}({digit})", self.kind()),
            Self::ChooseOperation(op) => write!(f, "{}({op})", self.kind()),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// Payload of a [`RawAction`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPayload {
    /// Digit key for `add-digit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digit: Option<String>,
    /// Operator symbol for `choose-operation`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

/// Loosely typed action as sent by a front end
///
/// ```
/// use keycalc::core::action::{Action, Digit, RawAction};
///
/// let raw = RawAction::from_json(r#"{"type":"add-digit","payload":{"digit":"7"}}"#).unwrap();
/// assert_eq!(raw.to_action(), Ok(Action::AddDigit(Digit::Seven)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    /// Action type identifier (wire id or constant name)
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<RawPayload>,
}

impl RawAction {
    /// Creates a raw action without payload
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Sets the digit payload
    #[must_use]
    pub fn with_digit(mut self, digit: impl Into<String>) -> Self {
        self.payload.get_or_insert_with(RawPayload::default).digit = Some(digit.into());
        self
    }

    /// Sets the operation payload
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.payload.get_or_insert_with(RawPayload::default).operation = Some(operation.into());
        self
    }

    /// Parses a raw action from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the raw action to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Converts into a typed [`Action`]
    ///
    /// Fails on an unknown type, or when `add-digit` / `choose-operation`
    /// lack a valid payload.
    pub fn to_action(&self) -> CalcResult<Action> {
        let kind: ActionKind = self.kind.parse()?;
        let payload = self.payload.as_ref();
        match kind {
            ActionKind::AddDigit => {
                let digit = payload
                    .and_then(|p| p.digit.as_deref())
                    .ok_or(CalcError::MissingPayload {
                        action: kind.id(),
                        field: "digit",
                    })?;
                Ok(Action::AddDigit(digit.parse()?))
            }
            ActionKind::ChooseOperation => {
                let symbol = payload
                    .and_then(|p| p.operation.as_deref())
                    .ok_or(CalcError::MissingPayload {
                        action: kind.id(),
                        field: "operation",
                    })?;
                Ok(Action::ChooseOperation(symbol.parse()?))
            }
            ActionKind::Clear => Ok(Action::Clear),
            ActionKind::DeleteDigit => Ok(Action::DeleteDigit),
            ActionKind::Evaluate => Ok(Action::Evaluate),
        }
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        let raw = Self::new(action.kind().id());
        match action {
            Action::AddDigit(digit) => raw.with_digit(digit),
            Action::ChooseOperation(op) => raw.with_operation(op.symbol()),
            Action::Clear | Action::DeleteDigit | Action::Evaluate => raw,
        }
    }
}

impl TryFrom<RawAction> for Action {
    type Error = CalcError;

    fn try_from(raw: RawAction) -> CalcResult<Self> {
        raw.to_action()
    }
}
