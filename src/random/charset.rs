//! Character sets for random strings.

use std::fmt;

use serde::{Deserialize, Serialize};

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT: &[u8] = b"0123456789";
const ALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const HEX: &[u8] = b"0123456789abcdef";
const GRAPH: &[u8] =
    b"!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Alphabet a random string is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Letters and digits.
    #[default]
    Alnum,
    /// Letters.
    Alpha,
    /// Decimal digits.
    Digit,
    /// Lowercase hexadecimal digits.
    Hex,
    /// Lowercase letters.
    Lower,
    /// Uppercase letters.
    Upper,
    /// Printable ASCII except space.
    Graph,
}

impl Charset {
    /// Every charset, in declaration order.
    pub const ALL: [Charset; 7] = [
        Self::Alnum,
        Self::Alpha,
        Self::Digit,
        Self::Hex,
        Self::Lower,
        Self::Upper,
        Self::Graph,
    ];

    /// The bytes this charset draws from.
    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            Self::Alnum => ALNUM,
            Self::Alpha => ALPHA,
            Self::Digit => DIGIT,
            Self::Hex => HEX,
            Self::Lower => LOWER,
            Self::Upper => UPPER,
            Self::Graph => GRAPH,
        }
    }

    /// Lowercase name as used on the command line and in config.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Alnum => "alnum",
            Self::Alpha => "alpha",
            Self::Digit => "digit",
            Self::Hex => "hex",
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Graph => "graph",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_cli_values() {
        use clap::ValueEnum;
        for charset in Charset::ALL {
            assert_eq!(Charset::from_str(charset.name(), false), Ok(charset));
        }
        assert!(Charset::from_str("emoji", false).is_err());
    }

    #[test]
    fn graph_excludes_space() {
        assert!(!Charset::Graph.alphabet().contains(&b' '));
        assert_eq!(Charset::Graph.alphabet().len(), 94);
    }

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(Charset::Alnum.alphabet().len(), 62);
        assert_eq!(Charset::Alpha.alphabet().len(), 52);
        assert_eq!(Charset::Hex.alphabet().len(), 16);
    }

    #[test]
    fn default_is_alnum() {
        assert_eq!(Charset::default(), Charset::Alnum);
    }
}
