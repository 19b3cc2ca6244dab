//! Calculator module for evaluating `operand operator operand` expressions.
//!
//! This module provides functionality to:
//! - Split an input buffer into its three tokens
//! - Parse operands in a numeral system's radix
//! - Format a result in binary, decimal and octal

mod evaluation;
mod format;
mod numeral;
mod operator;
mod tokenizer;

pub use evaluation::{ERROR_MESSAGE, Evaluation, evaluate, evaluate_expression};
pub use format::{result_message, to_binary, to_decimal, to_octal};
pub use numeral::{NumeralSystem, Orientation};
pub use operator::Operator;
pub use tokenizer::{Expression, parse_expression, split_tokens};
