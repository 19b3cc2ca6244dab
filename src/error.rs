//! Domain-specific error types for radix-calc.
//!
//! Evaluation errors never leave the evaluator as anything other than the
//! `"Error"` sentinel, but keeping them typed lets callers log the reason.

use std::num::ParseIntError;
use thiserror::Error;

/// Reasons an expression could not be evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input did not split into `operand operator operand`.
    #[error("Expected 3 tokens, found {0}")]
    WrongTokenCount(usize),

    /// The middle token is not one of `+ - * /`.
    #[error("'{0}' is not an operator")]
    NotAnOperator(String),

    /// An operand is empty, has digits outside the radix, or overflows `i32`.
    #[error("Invalid operand '{token}' for radix {radix}: {source}")]
    InvalidOperand {
        token: String,
        radix: u32,
        #[source]
        source: ParseIntError,
    },

    /// The right-hand operand of `/` is zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// The radix is outside `2..=36`.
    #[error("Unsupported radix {0}")]
    UnsupportedRadix(u32),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),

    /// Failed to serialize the config.
    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[source] toml::ser::Error),

    /// Failed to save the config file.
    #[error("Failed to save config: {0}")]
    SaveFailed(#[source] std::io::Error),
}

/// Clipboard errors.
#[derive(Error, Debug, Clone)]
pub enum ClipboardError {
    /// Failed to access the clipboard.
    #[error("Failed to access clipboard: {0}")]
    AccessFailed(String),

    /// Failed to copy content to the clipboard.
    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),
}
