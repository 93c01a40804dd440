//! # Input Events
//!
//! Typed events a presentation layer sends to the engine, plus the default
//! key bindings that map keypad labels and keyboard characters onto them.
//!
//! | Key(s)                         | Event                 |
//! |--------------------------------|-----------------------|
//! | `0`-`9`                        | `Symbol(Digit)`       |
//! | `.`                            | `Symbol(DecimalPoint)`|
//! | `+` `-` `*` `/`                | `Operator`            |
//! | `=` `↵` Enter                  | `Equals`              |
//! | `←` Backspace Delete `c` `C`   | `Clear`               |
//!
//! ## Example
//!
//! ```rust
//! use calc_core::input::{InputEvent, Symbol};
//! use calc_core::operator::Operator;
//!
//! let events = InputEvent::parse_keys("1 + 2 =").unwrap();
//! assert_eq!(events.len(), 4);
//! assert_eq!(events[1], InputEvent::Operator(Operator::Add));
//! assert_eq!(events[3], InputEvent::Equals);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::operator::Operator;

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> CalcResult<Self> {
        if value > 9 {
            return Err(CalcError::InvalidDigit {
                value: u32::from(value),
            });
        }
        Ok(Digit(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

/// A number-entry key: a digit or the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Digit(Digit),
    DecimalPoint,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::Digit(d) => d.as_char(),
            Symbol::DecimalPoint => '.',
        }
    }
}

/// One discrete event from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", content = "value")]
pub enum InputEvent {
    Symbol(Symbol),
    Operator(Operator),
    Equals,
    /// Backspace while typing a number, all-clear otherwise
    Clear,
}

impl InputEvent {
    pub fn digit(value: u8) -> CalcResult<Self> {
        Ok(InputEvent::Symbol(Symbol::Digit(Digit::new(value)?)))
    }

    pub fn point() -> Self {
        InputEvent::Symbol(Symbol::DecimalPoint)
    }

    /// Look up the event bound to a key character.
    pub fn from_key(key: char) -> CalcResult<Self> {
        if let Some(d) = Digit::from_char(key) {
            return Ok(InputEvent::Symbol(Symbol::Digit(d)));
        }
        match key {
            '.' => Ok(InputEvent::point()),
            '+' | '-' | '*' | '/' => Operator::try_from(key).map(InputEvent::Operator),
            '=' | '\n' | '\r' | '\u{21B5}' => Ok(InputEvent::Equals),
            '\u{2190}' | '\x08' | '\x7f' | 'c' | 'C' => Ok(InputEvent::Clear),
            other => Err(CalcError::unrecognized_key(other)),
        }
    }

    /// Map every key in `keys` to an event. Spaces and tabs are skipped.
    ///
    /// Fails on the first key without a binding.
    pub fn parse_keys(keys: &str) -> CalcResult<Vec<Self>> {
        keys.chars()
            .filter(|c| *c != ' ' && *c != '\t')
            .map(InputEvent::from_key)
            .collect()
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Symbol(s) => write!(f, "{}", s.as_char()),
            InputEvent::Operator(op) => write!(f, "{}", op),
            InputEvent::Equals => write!(f, "="),
            InputEvent::Clear => write!(f, "\u{2190}"),
        }
    }
}
