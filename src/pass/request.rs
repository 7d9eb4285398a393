//! Parsing of `"<length>*<count>"` requests.

use std::sync::LazyLock;

use regex::Regex;

use super::charset::StrengthTier;
use crate::error::RequestError;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 64;
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 10_000;

// Unanchored: the first `<digits>*<digits>` run anywhere in the input wins.
static REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*\*\s*([0-9]+)").expect("request pattern is valid")
});

/// A validated request: `count` passwords of `length` characters from `tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub tier: StrengthTier,
    pub length: usize,
    pub count: usize,
}

impl GenerationRequest {
    /// Build a request from already-split values, enforcing the bounds.
    pub fn new(tier: StrengthTier, length: usize, count: usize) -> Result<Self, RequestError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(RequestError::LengthOutOfRange(length.to_string()));
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
            return Err(RequestError::CountOutOfRange(count.to_string()));
        }
        Ok(Self { tier, length, count })
    }

    /// Parse raw input such as `"8*10"` or `"8 * 10"`.
    ///
    /// Text around the pair is ignored, so `"len 8 * 10"` asks for ten
    /// passwords of length 8.
    pub fn parse(tier: StrengthTier, raw: &str) -> Result<Self, RequestError> {
        if raw.trim().is_empty() {
            return Err(RequestError::Empty);
        }

        let caps = REQUEST
            .captures(raw)
            .ok_or_else(|| RequestError::Malformed(raw.to_string()))?;

        let length = bounded(&caps[1], MIN_LENGTH, MAX_LENGTH)
            .ok_or_else(|| RequestError::LengthOutOfRange(caps[1].to_string()))?;
        let count = bounded(&caps[2], MIN_COUNT, MAX_COUNT)
            .ok_or_else(|| RequestError::CountOutOfRange(caps[2].to_string()))?;

        Ok(Self { tier, length, count })
    }
}

/// Check input shape only, without range validation (for live prompt feedback).
pub fn matches_pattern(raw: &str) -> bool {
    REQUEST.is_match(raw)
}

// Digit runs too long for usize are out of range, not malformed.
fn bounded(digits: &str, min: usize, max: usize) -> Option<usize> {
    digits
        .parse::<usize>()
        .ok()
        .filter(|n| (min..=max).contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIER: StrengthTier = StrengthTier::Normal;

    #[test]
    fn parses_compact_and_spaced_forms() {
        for raw in ["8*10", "8 * 10", "8\t*  10", "  8*10  ", "008*010"] {
            let req = GenerationRequest::parse(TIER, raw).unwrap();
            assert_eq!((req.length, req.count), (8, 10), "input {raw:?}");
            assert_eq!(req.tier, TIER);
        }
    }

    #[test]
    fn any_in_range_pair_round_trips() {
        for m in [1, 2, 17, 63, 64] {
            for n in [1, 9, 250, 9_999, 10_000] {
                let req = GenerationRequest::parse(TIER, &format!("{m}*{n}")).unwrap();
                assert_eq!((req.length, req.count), (m, n));
                let req = GenerationRequest::parse(TIER, &format!("{m} *\t{n}")).unwrap();
                assert_eq!((req.length, req.count), (m, n));
            }
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(GenerationRequest::parse(TIER, ""), Err(RequestError::Empty));
        assert_eq!(GenerationRequest::parse(TIER, "   "), Err(RequestError::Empty));
    }

    #[test]
    fn malformed_input() {
        for raw in ["abc", "8x10", "8*", "*10", "8**10", "8 by 10", "eight*ten"] {
            assert_eq!(
                GenerationRequest::parse(TIER, raw),
                Err(RequestError::Malformed(raw.to_string())),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn embedded_request_is_extracted() {
        for raw in ["x 8*10 y", "8*10*2", "len 8 * 10", "-8*10", "[8*10]"] {
            let req = GenerationRequest::parse(TIER, raw).unwrap();
            assert_eq!((req.length, req.count), (8, 10), "input {raw:?}");
        }
        // The first pair wins, even when a later one would be in range.
        let req = GenerationRequest::parse(TIER, "8.5*10").unwrap();
        assert_eq!((req.length, req.count), (5, 10));
        assert_eq!(
            GenerationRequest::parse(TIER, "65*1 then 8*10"),
            Err(RequestError::LengthOutOfRange("65".into()))
        );
    }

    #[test]
    fn out_of_range_input() {
        assert_eq!(
            GenerationRequest::parse(TIER, "0*5"),
            Err(RequestError::LengthOutOfRange("0".into()))
        );
        assert_eq!(
            GenerationRequest::parse(TIER, "65*1"),
            Err(RequestError::LengthOutOfRange("65".into()))
        );
        assert_eq!(
            GenerationRequest::parse(TIER, "5*0"),
            Err(RequestError::CountOutOfRange("0".into()))
        );
        assert_eq!(
            GenerationRequest::parse(TIER, "5*10001"),
            Err(RequestError::CountOutOfRange("10001".into()))
        );
    }

    #[test]
    fn overflowing_digits_are_out_of_range() {
        let huge = "99999999999999999999999999";
        assert_eq!(
            GenerationRequest::parse(TIER, &format!("{huge}*1")),
            Err(RequestError::LengthOutOfRange(huge.into()))
        );
    }

    #[test]
    fn new_enforces_bounds() {
        assert!(GenerationRequest::new(TIER, 1, 1).is_ok());
        assert!(GenerationRequest::new(TIER, 64, 10_000).is_ok());
        assert!(GenerationRequest::new(TIER, 0, 1).is_err());
        assert!(GenerationRequest::new(TIER, 1, 10_001).is_err());
    }

    #[test]
    fn pattern_check_ignores_ranges() {
        assert!(matches_pattern("0*0"));
        assert!(matches_pattern("99 * 99999"));
        assert!(matches_pattern("size 8*10 please"));
        assert!(!matches_pattern("8 by 10"));
        assert!(!matches_pattern("8*"));
    }
}
