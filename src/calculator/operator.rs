//! The four arithmetic operators.

use std::fmt;

use crate::error::EvalError;

/// A binary arithmetic operator on 32-bit signed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Map an operator symbol to its operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Parse a token that must consist of exactly one operator symbol.
    pub fn parse_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator with 32-bit two's-complement wrapping.
    ///
    /// Division truncates toward zero and rejects a zero divisor before dividing.
    pub fn apply(self, lhs: i32, rhs: i32) -> Result<i32, EvalError> {
        match self {
            Self::Add => Ok(lhs.wrapping_add(rhs)),
            Self::Subtract => Ok(lhs.wrapping_sub(rhs)),
            Self::Multiply => Ok(lhs.wrapping_mul(rhs)),
            Self::Divide => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(lhs.wrapping_div(rhs))
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
