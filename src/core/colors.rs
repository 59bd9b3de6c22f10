//! Card colour identity as a five-bit set

use crate::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five colours of mana
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    fn bit(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Blue => 1 << 1,
            Color::Black => 1 << 2,
            Color::Red => 1 << 3,
            Color::Green => 1 << 4,
        }
    }

    fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

/// Set of colours, W=1 U=2 B=4 R=8 G=16
///
/// Ordering is by bit pattern, which gives every combination a stable place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colors(u8);

impl Colors {
    pub const COLORLESS: Colors = Colors(0);

    pub fn from_bits(bits: u8) -> Self {
        Colors(bits & 0b1_1111)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn with(self, color: Color) -> Self {
        Colors(self.0 | color.bit())
    }

    pub fn has(&self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    /// Superset test: every colour of `other` is also in `self`
    ///
    /// Colourless is contained in everything.
    pub fn contains(&self, other: Colors) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_colorless(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Colors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_colorless() {
            return write!(f, "C");
        }
        for color in Color::ALL {
            if self.has(color) {
                write!(f, "{}", color.letter())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Colors {
    type Err = AdvisorError;

    /// Parse a colour code like "WU" or "rg"; "" and "C" are colourless
    fn from_str(s: &str) -> Result<Self> {
        let mut colors = Colors::COLORLESS;
        for c in s.trim().chars() {
            colors = match c.to_ascii_uppercase() {
                'W' => colors.with(Color::White),
                'U' => colors.with(Color::Blue),
                'B' => colors.with(Color::Black),
                'R' => colors.with(Color::Red),
                'G' => colors.with(Color::Green),
                'C' | ',' | ' ' => colors,
                other => {
                    return Err(AdvisorError::InvalidRecord(format!(
                        "unknown colour '{other}' in '{s}'"
                    )))
                }
            };
        }
        Ok(colors)
    }
}

impl TryFrom<String> for Colors {
    type Error = AdvisorError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Colors> for String {
    fn from(colors: Colors) -> Self {
        colors.to_string()
    }
}
