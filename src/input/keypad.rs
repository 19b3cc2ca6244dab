//! Keypad keys and dispatching a key press onto the buffer.

use super::buffer::InputBuffer;
use crate::calculator::{NumeralSystem, Operator};

/// A key on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Operator(Operator),
    Backspace,
    Clear,
    Equals,
}

impl Key {
    /// Map a typed character to a key for `system`.
    ///
    /// `=` is equals and `<` is backspace. Characters that are neither a
    /// digit of the system nor an operator map to `None`.
    pub fn from_char(c: char, system: NumeralSystem) -> Option<Self> {
        if system.is_digit(c) {
            return Some(Self::Digit(c.to_ascii_lowercase()));
        }

        match c {
            '=' => Some(Self::Equals),
            '<' => Some(Self::Backspace),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }

    /// The label printed on the key.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(c) => c.to_string(),
            Self::Operator(op) => op.to_string(),
            Self::Backspace => "<".to_string(),
            Self::Clear => "C".to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

/// The keys offered for a numeral system.
pub fn keypad(system: NumeralSystem) -> Vec<Key> {
    let mut keys: Vec<Key> = system.digits().map(Key::Digit).collect();
    keys.extend(Operator::ALL.into_iter().map(Key::Operator));
    keys.extend([Key::Clear, Key::Backspace, Key::Equals]);
    keys
}

impl InputBuffer {
    /// Apply a key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(c) => self.append_digit(c),
            Key::Operator(op) => {
                if !self.append_operator(op) {
                    tracing::debug!("Ignored operator '{}'", op);
                }
            }
            Key::Backspace => self.remove_last(),
            Key::Clear => self.clear(),
            Key::Equals => {
                self.evaluate();
            }
        }
    }
}
