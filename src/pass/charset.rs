//! Character pools by strength tier.

use std::fmt;
use std::str::FromStr;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
// Every ASCII punctuation character, in code point order.
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Breadth of the character pool a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrengthTier {
    /// Upper and lower case letters.
    Weak,
    /// Letters and digits.
    #[default]
    Normal,
    /// Letters, digits and ASCII punctuation.
    Strong,
}

impl StrengthTier {
    pub const ALL: [StrengthTier; 3] = [Self::Weak, Self::Normal, Self::Strong];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Normal => "normal",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown strength tier: {} (expected weak, normal or strong)", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for StrengthTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(Self::Weak),
            "normal" => Ok(Self::Normal),
            "strong" => Ok(Self::Strong),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

/// Build the ordered character pool for a tier.
///
/// Each tier is the previous tier's pool plus one more symbol class, so
/// `build(Weak)` is a prefix of `build(Normal)`, which is a prefix of
/// `build(Strong)`.
pub fn build(tier: StrengthTier) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(size(tier));

    chars.extend(LOWERCASE.bytes());
    chars.extend(UPPERCASE.bytes());

    if matches!(tier, StrengthTier::Normal | StrengthTier::Strong) {
        chars.extend(DIGITS);
    }

    if tier == StrengthTier::Strong {
        chars.extend(SYMBOLS);
    }

    chars
}

/// Pool size for a tier (for entropy and uniqueness-space calculations).
pub fn size(tier: StrengthTier) -> usize {
    let mut size = 26 + 26;
    if tier != StrengthTier::Weak {
        size += DIGITS.len();
    }
    if tier == StrengthTier::Strong {
        size += SYMBOLS.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pool_sizes() {
        assert_eq!(build(StrengthTier::Weak).len(), 52);
        assert_eq!(build(StrengthTier::Normal).len(), 62);
        assert_eq!(build(StrengthTier::Strong).len(), 94);
        for tier in StrengthTier::ALL {
            assert_eq!(build(tier).len(), size(tier));
        }
    }

    #[test]
    fn pools_are_strictly_nested() {
        let weak: HashSet<u8> = build(StrengthTier::Weak).into_iter().collect();
        let normal: HashSet<u8> = build(StrengthTier::Normal).into_iter().collect();
        let strong: HashSet<u8> = build(StrengthTier::Strong).into_iter().collect();

        assert!(weak.is_subset(&normal) && weak.len() < normal.len());
        assert!(normal.is_subset(&strong) && normal.len() < strong.len());
    }

    #[test]
    fn strong_is_every_printable_non_space_ascii() {
        let strong: HashSet<u8> = build(StrengthTier::Strong).into_iter().collect();
        let expected: HashSet<u8> = (b'!'..=b'~').collect();
        assert_eq!(strong, expected);
    }

    #[test]
    fn weak_is_letters_only() {
        assert!(build(StrengthTier::Weak).iter().all(u8::is_ascii_alphabetic));
    }

    #[test]
    fn tier_names_round_trip() {
        for tier in StrengthTier::ALL {
            assert_eq!(tier.to_string().parse::<StrengthTier>(), Ok(tier));
        }
        assert_eq!(" STRONG ".parse::<StrengthTier>(), Ok(StrengthTier::Strong));
        assert!("medium".parse::<StrengthTier>().is_err());
    }
}
