//! Interactive keypad session over a line-based reader and writer.
//!
//! Each input line is either a command word (`clear`, `back`, `quit`,
//! `exit`) or a run of key characters pressed in order. The buffer text is
//! printed after every line.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::calculator::NumeralSystem;
use crate::input::{InputBuffer, Key, keypad};

/// Print the keys available for `system`.
pub fn print_keypad<W: Write>(system: NumeralSystem, output: &mut W) -> io::Result<()> {
    let labels: Vec<String> = keypad(system).iter().map(Key::label).collect();
    writeln!(output, "{} keypad: {}", system.display_name(), labels.join(" "))?;
    writeln!(
        output,
        "Type keys and press Enter. 'back' deletes, 'clear' resets, 'quit' exits."
    )
}

/// Run a session until `quit`, `exit` or end of input.
///
/// `on_result` receives the display text after each `=`.
pub fn run_keypad<R, W, F>(
    buffer: &mut InputBuffer,
    prompt: &str,
    input: R,
    output: &mut W,
    mut on_result: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str),
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "quit" | "exit" => break,
            "clear" => buffer.press(Key::Clear),
            "back" => buffer.press(Key::Backspace),
            keys => press_keys(buffer, keys, &mut on_result),
        }

        writeln!(output, "{}", buffer.text())?;
        write!(output, "{}", prompt)?;
        output.flush()?;
    }

    writeln!(output)?;
    debug!("Keypad session ended");
    Ok(())
}

fn press_keys<F: FnMut(&str)>(buffer: &mut InputBuffer, keys: &str, on_result: &mut F) {
    let system = buffer.system();
    for c in keys.chars().filter(|c| !c.is_whitespace()) {
        let Some(key) = Key::from_char(c, system) else {
            warn!("Ignoring '{}': not a {} key", c, system.display_name());
            continue;
        };

        buffer.press(key);
        if key == Key::Equals {
            on_result(buffer.text());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::run_session;

    #[test]
    fn test_binary_session() {
        let (output, results) = run_session(NumeralSystem::Binary, "101+11=\nquit\n");
        assert_eq!(output, "> Binary: 1000\nDecimal: 8\nOctal: 10\n> \n");
        assert_eq!(results, vec!["Binary: 1000\nDecimal: 8\nOctal: 10"]);
    }

    #[test]
    fn test_hex_session_with_commands() {
        let (output, results) = run_session(NumeralSystem::Hexadecimal, "a+6\nback\n5 =\n");
        assert_eq!(
            output,
            "> a+6\n> a+\n> Binary: 1111\nDecimal: 15\nOctal: 17\n> \n"
        );
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_clear_and_invalid_keys() {
        let (output, results) = run_session(NumeralSystem::Binary, "12x1\nclear\n1/0=\n");
        // '2' and 'x' are not binary keys
        assert_eq!(output, "> 11\n> \n> Error\n> \n");
        assert_eq!(results, vec!["Error"]);
    }

    #[test]
    fn test_operator_ignored_when_not_allowed() {
        let (output, _) = run_session(NumeralSystem::Binary, "+1--1\n");
        assert_eq!(output, "> 1-1\n> \n");
    }

    #[test]
    fn test_print_keypad() {
        let mut output = Vec::new();
        print_keypad(NumeralSystem::Binary, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Binary keypad: 0 1 + - * / C < =\n"));
    }
}
