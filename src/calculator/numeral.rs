//! Numeral systems and the orientation that selects one.

use serde::{Deserialize, Serialize};

/// The numeral system operands are typed in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    /// Base 2, offered in portrait orientation.
    #[default]
    #[value(alias = "bin")]
    #[serde(alias = "bin")]
    Binary,
    /// Base 16, offered in landscape orientation.
    #[value(alias = "hex")]
    #[serde(alias = "hex")]
    Hexadecimal,
}

impl NumeralSystem {
    /// The radix operands are parsed in.
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Hexadecimal => 16,
        }
    }

    /// The numeral system offered for a screen orientation.
    pub const fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Self::Binary,
            Orientation::Landscape => Self::Hexadecimal,
        }
    }

    /// Get the display name for this numeral system.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Hexadecimal => "Hexadecimal",
        }
    }

    /// Whether `c` is a digit in this numeral system (case-insensitive).
    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.radix())
    }

    /// The digits on this system's keypad, lowest first.
    pub fn digits(self) -> impl Iterator<Item = char> {
        let radix = self.radix();
        (0..radix).filter_map(move |d| char::from_digit(d, radix))
    }
}

/// Screen orientation, which decides the keypad shown.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}
