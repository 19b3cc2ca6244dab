//! Input buffer controller and keypad.

mod buffer;
mod keypad;

pub use buffer::InputBuffer;
pub use keypad::{Key, keypad};
