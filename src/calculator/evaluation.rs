//! Expression evaluation.
//!
//! Parses `operand operator operand` in a radix, applies the operator and
//! formats the result in binary, decimal and octal. Every failure collapses
//! to the [`ERROR_MESSAGE`] sentinel at the [`evaluate`] boundary.

use serde::Serialize;

use super::format::{result_message, to_binary, to_decimal, to_octal};
use super::tokenizer::parse_expression;
use crate::error::EvalError;

/// Text shown in place of a result when evaluation fails.
pub const ERROR_MESSAGE: &str = "Error";

/// A successfully evaluated expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// The input buffer that was evaluated.
    pub expression: String,
    /// The radix the operands were parsed in.
    pub radix: u32,
    /// The integer result.
    pub value: i32,
    pub binary: String,
    pub decimal: String,
    /// Two's-complement bits for negative values.
    pub octal: String,
}

impl Evaluation {
    fn new(expression: &str, radix: u32, value: i32) -> Self {
        Self {
            expression: expression.to_string(),
            radix,
            value,
            binary: to_binary(value),
            decimal: to_decimal(value),
            octal: to_octal(value),
        }
    }

    /// The three-line message shown in place of the input.
    pub fn message(&self) -> String {
        result_message(self.value)
    }
}

/// Evaluate `buffer` with operands in `radix`.
pub fn evaluate_expression(buffer: &str, radix: u32) -> Result<Evaluation, EvalError> {
    // from_str_radix panics outside this range
    if !(2..=36).contains(&radix) {
        return Err(EvalError::UnsupportedRadix(radix));
    }

    let expression = parse_expression(buffer)?;
    let lhs = parse_operand(expression.lhs, radix)?;
    let rhs = parse_operand(expression.rhs, radix)?;
    let value = expression.operator.apply(lhs, rhs)?;

    Ok(Evaluation::new(buffer, radix, value))
}

/// Evaluate `buffer` and return either the result message or `"Error"`.
pub fn evaluate(buffer: &str, radix: u32) -> String {
    match evaluate_expression(buffer, radix) {
        Ok(evaluation) => evaluation.message(),
        Err(e) => {
            tracing::debug!(expression = buffer, radix, "Evaluation failed: {}", e);
            ERROR_MESSAGE.to_string()
        }
    }
}

fn parse_operand(token: &str, radix: u32) -> Result<i32, EvalError> {
    i32::from_str_radix(token, radix).map_err(|source| EvalError::InvalidOperand {
        token: token.to_string(),
        radix,
        source,
    })
}
