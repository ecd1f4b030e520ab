//! Floor-code to level-index resolution.

use std::sync::LazyLock;

use regex::Regex;

static FLOOR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-F(\d+)$").expect("floor suffix pattern"));

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)$").expect("trailing digits pattern"));

/// Resolves a structured floor code to its level index.
///
/// Codes like `"WH-A-F3"` resolve through the `-F<digits>` suffix;
/// otherwise any trailing digits are used. Codes with no parseable
/// suffix, and codes that would resolve to the reserved level 0,
/// default to level 1. This never fails: backend data quality must not
/// abort a layout.
pub fn level_from_code(code: &str) -> u32 {
    let trimmed = code.trim();
    let captured = FLOOR_SUFFIX
        .captures(trimmed)
        .or_else(|| TRAILING_DIGITS.captures(trimmed));

    let Some(caps) = captured else {
        log::warn!("floor code {code:?} has no numeric suffix, defaulting to level 1");
        return 1;
    };

    match caps[1].parse::<u32>() {
        Ok(0) => {
            log::warn!("floor code {code:?} names reserved level 0, defaulting to level 1");
            1
        }
        Ok(level) => level,
        Err(_) => {
            log::warn!("floor code {code:?} has an unparseable suffix, defaulting to level 1");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_suffix() {
        assert_eq!(level_from_code("WH-A-F3"), 3);
        assert_eq!(level_from_code("WH-B-F12"), 12);
        assert_eq!(level_from_code("  WH-A-F2  "), 2);
    }

    #[test]
    fn test_trailing_digits_fallback() {
        assert_eq!(level_from_code("FLOOR2"), 2);
        assert_eq!(level_from_code("wh-a-4"), 4);
    }

    #[test]
    fn test_default_level() {
        assert_eq!(level_from_code("WH-A"), 1);
        assert_eq!(level_from_code(""), 1);
        assert_eq!(level_from_code("F3-ANNEX"), 1);
    }

    #[test]
    fn test_reserved_and_oversized() {
        assert_eq!(level_from_code("WH-A-F0"), 1);
        // More digits than u32 can hold falls back rather than panicking.
        assert_eq!(level_from_code("WH-A-F99999999999999999999"), 1);
    }
}
