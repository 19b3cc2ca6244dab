//! The input buffer behind the calculator display.

use crate::calculator::{NumeralSystem, Operator, evaluate};

/// Characters typed so far plus the operation-performed flag.
///
/// The numeral system is fixed for the lifetime of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    system: NumeralSystem,
    text: String,
    operation_performed: bool,
}

impl InputBuffer {
    /// Create an empty buffer for a numeral system.
    pub fn new(system: NumeralSystem) -> Self {
        Self {
            system,
            text: String::new(),
            operation_performed: false,
        }
    }

    pub fn system(&self) -> NumeralSystem {
        self.system
    }

    /// The current display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether an operator was appended since the last digit or clear.
    pub fn operation_performed(&self) -> bool {
        self.operation_performed
    }

    /// Append a digit and re-allow an operator.
    pub fn append_digit(&mut self, digit: char) {
        self.text.push(digit);
        self.operation_performed = false;
    }

    /// Append an operator if the buffer ends in a digit and no operator
    /// followed it yet.
    ///
    /// Any digit of the buffer's numeral system counts, so `a`-`f` qualify
    /// in hexadecimal mode.
    ///
    /// Returns `false` and leaves the buffer untouched otherwise.
    pub fn append_operator(&mut self, operator: Operator) -> bool {
        if self.operation_performed {
            return false;
        }

        match self.text.chars().last() {
            Some(last) if self.system.is_digit(last) => {
                self.text.push(operator.symbol());
                self.operation_performed = true;
                true
            }
            _ => false,
        }
    }

    /// Remove the last character, if any.
    ///
    /// The operation-performed flag is left as is.
    pub fn remove_last(&mut self) {
        self.text.pop();
    }

    /// Empty the buffer and reset the flag.
    pub fn clear(&mut self) {
        self.text.clear();
        self.operation_performed = false;
    }

    /// Replace the text with the evaluation result and return it.
    pub fn evaluate(&mut self) -> &str {
        self.text = evaluate(&self.text, self.system.radix());
        &self.text
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new(NumeralSystem::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ERROR_MESSAGE;
    use crate::test_utils::mock_buffer;

    #[test]
    fn test_new_is_empty() {
        let buffer = InputBuffer::new(NumeralSystem::Binary);
        assert!(buffer.is_empty());
        assert!(!buffer.operation_performed());
    }

    #[test]
    fn test_append_digit_resets_flag() {
        let mut buffer = InputBuffer::new(NumeralSystem::Binary);
        buffer.append_digit('1');
        assert!(buffer.append_operator(Operator::Add));
        assert!(buffer.operation_performed());
        buffer.append_digit('0');
        assert!(!buffer.operation_performed());
        assert_eq!(buffer.text(), "1+0");
    }

    #[test]
    fn test_operator_needs_digit() {
        let mut buffer = InputBuffer::new(NumeralSystem::Binary);
        assert!(!buffer.append_operator(Operator::Add));
        assert!(buffer.is_empty());
        assert!(!buffer.operation_performed());
    }

    #[test]
    fn test_operator_after_clear_is_noop() {
        let mut buffer = InputBuffer::new(NumeralSystem::Binary);
        buffer.append_digit('1');
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(!buffer.operation_performed());
        assert!(!buffer.append_operator(Operator::Multiply));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_second_operator_is_noop() {
        let mut buffer = InputBuffer::new(NumeralSystem::Binary);
        buffer.append_digit('1');
        assert!(buffer.append_operator(Operator::Add));
        assert!(!buffer.append_operator(Operator::Subtract));
        assert_eq!(buffer.text(), "1+");
    }

    #[test]
    fn test_operator_after_hex_letter() {
        let mut buffer = InputBuffer::new(NumeralSystem::Hexadecimal);
        buffer.append_digit('a');
        assert!(buffer.append_operator(Operator::Add));
        assert_eq!(buffer.text(), "a+");
    }

    #[test]
    fn test_remove_last() {
        let mut buffer = InputBuffer::new(NumeralSystem::Hexadecimal);
        buffer.remove_last();
        assert!(buffer.is_empty());

        buffer.append_digit('f');
        buffer.append_digit('3');
        buffer.remove_last();
        assert_eq!(buffer.text(), "f");
    }

    #[test]
    fn test_remove_operator_keeps_flag() {
        let mut buffer = mock_buffer(NumeralSystem::Binary, "1+");
        buffer.remove_last();
        assert_eq!(buffer.text(), "1");
        assert!(buffer.operation_performed());
        assert!(!buffer.append_operator(Operator::Subtract));
    }

    #[test]
    fn test_evaluate_overwrites_text() {
        let mut buffer = mock_buffer(NumeralSystem::Binary, "101+11");
        assert_eq!(buffer.evaluate(), "Binary: 1000\nDecimal: 8\nOctal: 10");
        assert_eq!(buffer.text(), "Binary: 1000\nDecimal: 8\nOctal: 10");
    }

    #[test]
    fn test_evaluate_incomplete() {
        let mut buffer = mock_buffer(NumeralSystem::Binary, "1/");
        assert_eq!(buffer.evaluate(), ERROR_MESSAGE);
        assert!(buffer.operation_performed());
    }
}
