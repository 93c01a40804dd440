//! # Binary Operators
//!
//! The closed set of four-function operators and the single arithmetic step
//! the engine performs when a pending operator meets its right-hand operand.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::operator::Operator;
//!
//! assert_eq!(Operator::Multiply.apply(3.0, 4.0), Ok(12.0));
//! assert!(Operator::Divide.apply(3.0, 0.0).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A binary operator. Operators chain strictly left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// The key symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Combine the accumulator with the right-hand operand.
    ///
    /// Returns the new accumulator value. Dividing by zero (either sign)
    /// returns [`CalcError::DivisionByZero`]; the caller keeps its old
    /// accumulator in that case. Overflow is not an error: results may be
    /// infinite or NaN.
    pub fn apply(self, accumulator: f64, right: f64) -> CalcResult<f64> {
        match self {
            Operator::Add => Ok(accumulator + right),
            Operator::Subtract => Ok(accumulator - right),
            Operator::Multiply => Ok(accumulator * right),
            Operator::Divide => {
                if right == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(accumulator / right)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(key: char) -> CalcResult<Self> {
        match key {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(CalcError::unrecognized_key(other)),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::try_from(c),
            _ => Err(CalcError::UnrecognizedKey { key: s.to_string() }),
        }
    }
}
