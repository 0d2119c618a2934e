//! Cipher variants and their fixed alphabets.
//!
//! All lookup tables are `'static` constants keyed by [`Variant`], so they
//! can be shared freely across threads and calls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdfgvxError;

/// Row/column labels of the 5×5 square.
const ADFGX_INDICATORS: [char; 5] = ['A', 'D', 'F', 'G', 'X'];

/// Row/column labels of the 6×6 square.
const ADFGVX_INDICATORS: [char; 6] = ['A', 'D', 'F', 'G', 'V', 'X'];

/// Latin alphabet with J merged into I.
const ADFGX_UNIVERSE: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Latin alphabet followed by the decimal digits.
const ADFGVX_UNIVERSE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// The two historical field cipher variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// 5×5 square over the 25 letters, I and J merged.
    #[serde(rename = "ADFGX")]
    Adfgx,
    /// 6×6 square over the 26 letters and 10 digits.
    #[serde(rename = "ADFGVX")]
    Adfgvx,
}

impl Variant {
    /// Indicator alphabet labelling square rows and columns.
    pub fn indicators(self) -> &'static [char] {
        match self {
            Variant::Adfgx => &ADFGX_INDICATORS,
            Variant::Adfgvx => &ADFGVX_INDICATORS,
        }
    }

    /// Side length of the Polybius square.
    pub fn dimension(self) -> usize {
        self.indicators().len()
    }

    /// Symbols the square holds, in their natural fill order.
    pub fn universe(self) -> &'static str {
        match self {
            Variant::Adfgx => ADFGX_UNIVERSE,
            Variant::Adfgvx => ADFGVX_UNIVERSE,
        }
    }

    /// Returns `true` if `symbol` has a cell in this variant's square.
    pub fn contains(self, symbol: char) -> bool {
        self.universe().contains(symbol)
    }

    /// Position of `indicator` in the indicator alphabet.
    pub fn indicator_index(self, indicator: char) -> Option<usize> {
        self.indicators().iter().position(|&c| c == indicator)
    }

    /// Whether digits are spelled out as placeholder words.
    ///
    /// Only ADFGX needs this; ADFGVX carries digits natively.
    pub fn expands_digits(self) -> bool {
        matches!(self, Variant::Adfgx)
    }

    /// Canonical uppercase name.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Adfgx => "ADFGX",
            Variant::Adfgvx => "ADFGVX",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = AdfgvxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADFGX" => Ok(Variant::Adfgx),
            "ADFGVX" => Ok(Variant::Adfgvx),
            _ => Err(AdfgvxError::UnknownVariant(s.to_string())),
        }
    }
}
