//! Discrete key events accepted by the calculator engine.
//!
//! Labels and keyboard mnemonics are decided here, at the boundary,
//! so the engine only ever sees a closed `Input` type.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, returning `None` for anything above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Create a digit from its ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

/// The four binary operators of the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl OperatorKind {
    /// Apply the operator with plain IEEE-754 double semantics.
    ///
    /// Division by zero is not trapped: it yields `inf`, `-inf` or `NaN`.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }
}

/// One user action on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Input {
    Digit(Digit),
    DecimalPoint,
    Operator(OperatorKind),
    Equals,
    /// Reset everything ("C").
    Clear,
    /// Discard only the number being typed ("CE").
    ClearEntry,
}

/// Error returned when a button label has no matching input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown key label: {0:?}")]
    UnknownLabel(String),
}

impl Input {
    /// Map a keypad button caption to its input.
    ///
    /// `C` and `CE` are told apart by the whole label, never by the
    /// first character alone.
    pub fn from_label(label: &str) -> Result<Self, InputError> {
        let input = match label {
            "." => Self::DecimalPoint,
            "=" => Self::Equals,
            "C" => Self::Clear,
            "CE" => Self::ClearEntry,
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Digit::from_char(c)
                        .map(Self::Digit)
                        .or_else(|| OperatorKind::from_symbol(c).map(Self::Operator)),
                    _ => None,
                }
                .ok_or_else(|| InputError::UnknownLabel(label.to_string()))?
            }
        };
        Ok(input)
    }

    /// Map a keyboard accelerator to its input.
    ///
    /// Besides the printed captions, `c` clears and `e` clears the entry,
    /// and `x` is accepted for multiplication.
    pub fn from_mnemonic(key: char) -> Option<Self> {
        match key {
            '.' | ',' => Some(Self::DecimalPoint),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            'e' | 'E' => Some(Self::ClearEntry),
            'x' | 'X' => Some(Self::Operator(OperatorKind::Mul)),
            _ => Digit::from_char(key)
                .map(Self::Digit)
                .or_else(|| OperatorKind::from_symbol(key).map(Self::Operator)),
        }
    }

    /// The canonical keypad caption for this input.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.value().to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ClearEntry => "CE".to_string(),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.label())
    }
}

impl From<Input> for String {
    fn from(input: Input) -> Self {
        input.label()
    }
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<OperatorKind> for Input {
    fn from(op: OperatorKind) -> Self {
        Self::Operator(op)
    }
}
