//! States and input symbols of the modulo-three automaton.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Remainder-tracking state: `Sn` means the bits read so far encode a
/// number congruent to `n` modulo three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModThreeState {
    S0,
    S1,
    S2,
}

impl ModThreeState {
    pub const ALL: [ModThreeState; 3] = [Self::S0, Self::S1, Self::S2];

    /// The remainder this state stands for.
    pub fn remainder(self) -> u8 {
        match self {
            Self::S0 => 0,
            Self::S1 => 1,
            Self::S2 => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::S0 => "S0",
            Self::S1 => "S1",
            Self::S2 => "S2",
        }
    }
}

impl fmt::Display for ModThreeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bit {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
}

impl Bit {
    pub const ALL: [Bit; 2] = [Self::Zero, Self::One];

    /// Parses `'0'` or `'1'`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
