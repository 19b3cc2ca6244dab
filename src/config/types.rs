//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::calculator::{NumeralSystem, Orientation};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Numeral system to use regardless of orientation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<NumeralSystem>,
    /// Orientation that picks the numeral system when `mode` is unset.
    pub orientation: Orientation,
    /// Prompt printed before each line of the keypad session.
    pub prompt: String,
    /// Print the available keys when a keypad session starts.
    pub show_keypad: bool,
    /// Copy each keypad session result to the clipboard.
    pub copy_results: bool,
}

impl AppConfig {
    /// The numeral system this config selects.
    pub fn numeral_system(&self) -> NumeralSystem {
        self.mode
            .unwrap_or_else(|| NumeralSystem::for_orientation(self.orientation))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: None,
            orientation: Orientation::Portrait,
            prompt: "> ".to_string(),
            show_keypad: true,
            copy_results: false,
        }
    }
}
