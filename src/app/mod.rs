//! Application setup and the interactive keypad session.

pub mod init;
pub mod repl;

pub use init::init_logging;
pub use repl::{print_keypad, run_keypad};
