//! Splitting an input buffer into `operand operator operand`.

use lazy_static::lazy_static;
use regex::Regex;

use super::operator::Operator;
use crate::error::EvalError;

lazy_static! {
    /// Matches a single operator character.
    static ref OPERATOR: Regex = Regex::new(r"[+\-*/]").unwrap();
}

/// A buffer split into its three tokens, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression<'a> {
    pub lhs: &'a str,
    pub operator: Operator,
    pub rhs: &'a str,
}

/// Split `input` at a boundary before and after every operator character.
///
/// Operator characters are kept as tokens of their own. Empty tokens are
/// kept too, so a leading or trailing operator yields an empty operand and
/// adjacent operators yield more than three tokens.
pub fn split_tokens(input: &str) -> Vec<&str> {
    let mut boundaries = Vec::new();
    for m in OPERATOR.find_iter(input) {
        boundaries.push(m.start());
        boundaries.push(m.end());
    }
    // Adjacent operators share a boundary
    boundaries.dedup();

    let mut tokens = Vec::with_capacity(boundaries.len() + 1);
    let mut last = 0;
    for boundary in boundaries {
        tokens.push(&input[last..boundary]);
        last = boundary;
    }
    tokens.push(&input[last..]);
    tokens
}

/// Split `input` and check it has the `operand operator operand` shape.
///
/// Operands are not parsed here.
pub fn parse_expression(input: &str) -> Result<Expression<'_>, EvalError> {
    let tokens = split_tokens(input);
    let &[lhs, operator, rhs] = tokens.as_slice() else {
        return Err(EvalError::WrongTokenCount(tokens.len()));
    };

    let operator = Operator::parse_token(operator)
        .ok_or_else(|| EvalError::NotAnOperator(operator.to_string()))?;

    Ok(Expression { lhs, operator, rhs })
}
