//! Inclusive integer ranges and the `num_in_range` check.
//!
//! A range specifier is written `<min>:<max>` where either side may be left
//! empty: `5:`, `:10`, `3:7` and `:` are all valid. Exactly one `:` is
//! required, and each bound is an unsigned integer.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::status::{CheckFailure, CheckResult};

static RANGE_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]*):([0-9]*)$").expect("range pattern compiles"));

/// An inclusive range with optional bounds.
///
/// `min <= max` is not enforced. A range with `min > max` is valid to
/// construct and simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct Range {
    /// Lower bound, if any.
    pub min: Option<u64>,
    /// Upper bound, if any.
    pub max: Option<u64>,
}

impl Range {
    /// A range with no bounds; contains every value.
    pub const UNBOUNDED: Range = Range {
        min: None,
        max: None,
    };

    /// Create a range from optional bounds.
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range, bounds included.
    pub fn contains<T: Into<i128>>(&self, value: T) -> bool {
        let value = value.into();
        if let Some(min) = self.min {
            if value < i128::from(min) {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > i128::from(max) {
                return false;
            }
        }
        true
    }
}

impl FromStr for Range {
    type Err = CheckFailure;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let malformed = || CheckFailure::MalformedRange {
            spec: spec.to_string(),
        };

        let caps = RANGE_SPEC.captures(spec).ok_or_else(malformed)?;
        let bound = |idx: usize| -> Result<Option<u64>, CheckFailure> {
            match caps.get(idx).map(|m| m.as_str()) {
                None | Some("") => Ok(None),
                Some(digits) => digits.parse().map(Some).map_err(|_| malformed()),
            }
        };

        Ok(Self {
            min: bound(1)?,
            max: bound(2)?,
        })
    }
}

impl TryFrom<String> for Range {
    type Error = CheckFailure;

    fn try_from(spec: String) -> Result<Self, Self::Error> {
        spec.parse()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(min) = self.min {
            write!(f, "{}", min)?;
        }
        f.write_str(":")?;
        if let Some(max) = self.max {
            write!(f, "{}", max)?;
        }
        Ok(())
    }
}

/// Parse a value argument for a range check.
///
/// Empty input is its own failure, distinct from a non-integer.
pub fn parse_value(value: &str) -> Result<i64, CheckFailure> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CheckFailure::EmptyValue);
    }
    trimmed.parse().map_err(|_| CheckFailure::InvalidValue {
        value: value.to_string(),
    })
}

/// Check an already-parsed value against a range.
pub fn check_range(value: i64, range: &Range) -> CheckResult {
    if range.contains(value) {
        tracing::debug!("{} is within {}", value, range);
        Ok(())
    } else {
        Err(CheckFailure::OutOfRange {
            value,
            range: *range,
        })
    }
}

/// Decide whether `value` lies within the range written as `spec`.
///
/// The specifier is parsed first; a malformed specifier fails without
/// looking at the value.
pub fn num_in_range(value: &str, spec: &str) -> CheckResult {
    let range: Range = spec.parse()?;
    let value = parse_value(value)?;
    check_range(value, &range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_bounds() {
        let range: Range = "3:7".parse().unwrap();
        assert_eq!(range, Range::new(Some(3), Some(7)));
    }

    #[test]
    fn parses_open_bounds() {
        assert_eq!("5:".parse::<Range>().unwrap(), Range::new(Some(5), None));
        assert_eq!(":10".parse::<Range>().unwrap(), Range::new(None, Some(10)));
        assert_eq!(":".parse::<Range>().unwrap(), Range::UNBOUNDED);
    }

    #[test]
    fn rejects_missing_separator() {
        let err = "abc".parse::<Range>().unwrap_err();
        assert!(matches!(err, CheckFailure::MalformedRange { .. }));
        assert!("10".parse::<Range>().is_err());
        assert!("".parse::<Range>().is_err());
    }

    #[test]
    fn rejects_extra_separator_and_signs() {
        assert!("1:2:3".parse::<Range>().is_err());
        assert!("-1:5".parse::<Range>().is_err());
        assert!("a:5".parse::<Range>().is_err());
        assert!(" 1:5".parse::<Range>().is_err());
    }

    #[test]
    fn rejects_bound_overflow() {
        assert!("99999999999999999999999:".parse::<Range>().is_err());
    }

    #[test]
    fn display_round_trips_open_bounds() {
        assert_eq!(Range::new(Some(5), None).to_string(), "5:");
        assert_eq!(Range::new(None, Some(10)).to_string(), ":10");
        assert_eq!(Range::UNBOUNDED.to_string(), ":");
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = Range::new(Some(3), Some(7));
        assert!(!range.contains(2i64));
        assert!(range.contains(3i64));
        assert!(range.contains(7i64));
        assert!(!range.contains(8i64));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = Range::new(Some(7), Some(3));
        for v in 0i64..10 {
            assert!(!range.contains(v));
        }
    }

    #[test]
    fn open_max_accepts_negative_values() {
        let range = Range::new(None, Some(10));
        assert!(range.contains(-50i64));
        assert!(!Range::new(Some(0), None).contains(-1i64));
    }

    #[test]
    fn unbounded_range_contains_extremes() {
        assert!(Range::UNBOUNDED.contains(i64::MIN));
        assert!(Range::UNBOUNDED.contains(u64::MAX));
    }

    #[test]
    fn num_in_range_matches_inequality() {
        for min in 0u64..4 {
            for max in min..6 {
                let spec = format!("{}:{}", min, max);
                for v in -2i64..8 {
                    let expected = (min as i64) <= v && v <= (max as i64);
                    assert_eq!(
                        num_in_range(&v.to_string(), &spec).is_ok(),
                        expected,
                        "{} in {}",
                        v,
                        spec
                    );
                }
            }
        }
    }

    #[test]
    fn colon_only_always_passes() {
        for v in ["-9000", "0", "42", "9223372036854775807"] {
            assert!(num_in_range(v, ":").is_ok());
        }
    }

    #[test]
    fn malformed_spec_fails_before_value() {
        let err = num_in_range("", "abc").unwrap_err();
        assert!(matches!(err, CheckFailure::MalformedRange { .. }));
        assert!(num_in_range("5", "abc").is_err());
    }

    #[test]
    fn empty_value_is_an_error_even_without_bounds() {
        assert_eq!(num_in_range("", ":"), Err(CheckFailure::EmptyValue));
        assert_eq!(num_in_range("   ", "1:2"), Err(CheckFailure::EmptyValue));
    }

    #[test]
    fn non_integer_value_is_malformed() {
        let err = num_in_range("4.5", "1:10").unwrap_err();
        assert!(err.is_malformed());
        assert!(matches!(err, CheckFailure::InvalidValue { .. }));
    }

    #[test]
    fn out_of_range_reports_value_and_range() {
        let err = num_in_range("11", ":10").unwrap_err();
        assert_eq!(
            err,
            CheckFailure::OutOfRange {
                value: 11,
                range: Range::new(None, Some(10)),
            }
        );
        assert!(!err.is_malformed());
    }

    #[test]
    fn deserializes_from_string() {
        let range: Range = serde_yaml::from_str("\"2:4\"").unwrap();
        assert_eq!(range, Range::new(Some(2), Some(4)));
        assert!(serde_yaml::from_str::<Range>("\"2-4\"").is_err());
    }
}
