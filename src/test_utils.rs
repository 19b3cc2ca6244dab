//! Test utilities and mock factories.
//!
//! Only compiled in test builds.

use std::io::Cursor;

use crate::app::run_keypad;
use crate::calculator::{NumeralSystem, Orientation};
use crate::config::AppConfig;
use crate::input::{InputBuffer, Key};

/// Create a mock AppConfig with default values.
pub fn mock_config() -> AppConfig {
    AppConfig::default()
}

/// Create a mock AppConfig for a landscape (hexadecimal) session.
pub fn mock_landscape_config() -> AppConfig {
    AppConfig {
        orientation: Orientation::Landscape,
        ..AppConfig::default()
    }
}

/// Create a buffer with `keys` already typed.
pub fn mock_buffer(system: NumeralSystem, keys: &str) -> InputBuffer {
    let mut buffer = InputBuffer::new(system);
    for c in keys.chars() {
        if let Some(key) = Key::from_char(c, system) {
            buffer.press(key);
        }
    }
    buffer
}

/// Run a keypad session over `script` with the `"> "` prompt.
///
/// Returns the session output and every result passed on after `=`.
pub fn run_session(system: NumeralSystem, script: &str) -> (String, Vec<String>) {
    let mut buffer = InputBuffer::new(system);
    let mut output = Vec::new();
    let mut results = Vec::new();

    run_keypad(
        &mut buffer,
        "> ",
        Cursor::new(script.as_bytes()),
        &mut output,
        |result| results.push(result.to_string()),
    )
    .unwrap();

    (String::from_utf8(output).unwrap(), results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_config() {
        let config = mock_config();
        assert_eq!(config.numeral_system(), NumeralSystem::Binary);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_mock_landscape_config() {
        let config = mock_landscape_config();
        assert_eq!(config.numeral_system(), NumeralSystem::Hexadecimal);
    }

    #[test]
    fn test_mock_buffer() {
        let buffer = mock_buffer(NumeralSystem::Hexadecimal, "ff*2");
        assert_eq!(buffer.text(), "ff*2");
        assert!(!buffer.operation_performed());
    }

    #[test]
    fn test_run_session_empty_script() {
        let (output, results) = run_session(NumeralSystem::Binary, "");
        assert_eq!(output, "> \n");
        assert!(results.is_empty());
    }
}
