//! Relative-or-absolute pattern values
//!
//! Pattern offsets, end offsets and repeat intervals are written either as a
//! percentage of the path length (`"25%"`) or as an absolute pixel distance
//! (`20`, `"20"`, `"20px"`). This module parses those raw inputs and resolves
//! them against a concrete path length.

use crate::error::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw pattern value as written by a caller or a configuration file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPatternValue {
    /// Field omitted
    #[default]
    Missing,
    /// Numeric pixel value
    Number(f64),
    /// Textual value, either a percentage or a number
    Text(String),
}

impl RawPatternValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, RawPatternValue::Missing)
    }
}

impl From<f64> for RawPatternValue {
    fn from(value: f64) -> Self {
        RawPatternValue::Number(value)
    }
}

impl From<&str> for RawPatternValue {
    fn from(value: &str) -> Self {
        RawPatternValue::Text(value.to_string())
    }
}

impl From<String> for RawPatternValue {
    fn from(value: String) -> Self {
        RawPatternValue::Text(value)
    }
}

impl<T: Into<RawPatternValue>> From<Option<T>> for RawPatternValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawPatternValue::Missing, Into::into)
    }
}

impl fmt::Display for RawPatternValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "<missing>"),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A length expressed in pixels or as a fraction of the total path length
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelativeOrAbsoluteValue {
    /// Pixel distance, or a ratio (1.0 = whole path) when not in pixels
    pub value: f64,
    /// Whether `value` is an absolute pixel distance
    pub is_in_pixels: bool,
}

impl RelativeOrAbsoluteValue {
    pub fn pixels(value: f64) -> Self {
        Self {
            value,
            is_in_pixels: true,
        }
    }

    pub fn ratio(value: f64) -> Self {
        Self {
            value,
            is_in_pixels: false,
        }
    }

    /// Absolute distance along a path of `total_path_length`
    pub fn resolve(&self, total_path_length: f64) -> f64 {
        if self.is_in_pixels {
            self.value
        } else {
            self.value * total_path_length
        }
    }
}

impl fmt::Display for RelativeOrAbsoluteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_in_pixels {
            write!(f, "{}px", self.value)
        } else {
            write!(f, "{}%", self.value * 100.0)
        }
    }
}

impl FromStr for RelativeOrAbsoluteValue {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_text(s)
    }
}

/// Parse a raw offset/end offset/repeat value
///
/// * text containing `%` - leading number divided by 100, relative
/// * anything else - coerced to a number (missing or empty gives 0),
///   absolute only when strictly positive
///
/// Text with no leading number and non-finite numbers are rejected.
pub fn parse_relative_or_absolute_value(
    raw: &RawPatternValue,
) -> Result<RelativeOrAbsoluteValue, PatternError> {
    match raw {
        RawPatternValue::Missing => Ok(absolute(0.0)),
        RawPatternValue::Number(n) => {
            if !n.is_finite() {
                return Err(PatternError::invalid_value(
                    n.to_string(),
                    "value must be a finite number",
                ));
            }
            Ok(absolute(*n))
        }
        RawPatternValue::Text(s) => parse_text(s),
    }
}

fn parse_text(input: &str) -> Result<RelativeOrAbsoluteValue, PatternError> {
    if input.contains('%') {
        let value = parse_float_prefix(input).ok_or_else(|| {
            PatternError::invalid_value(input, "percentage has no leading number")
        })?;
        return Ok(RelativeOrAbsoluteValue::ratio(value / 100.0));
    }

    if input.is_empty() {
        return Ok(absolute(0.0));
    }

    let value = parse_float_prefix(input)
        .ok_or_else(|| PatternError::invalid_value(input, "not a number"))?;
    Ok(absolute(value))
}

fn absolute(value: f64) -> RelativeOrAbsoluteValue {
    RelativeOrAbsoluteValue {
        value,
        is_in_pixels: value > 0.0,
    }
}

/// Longest numeric prefix of `input` after leading whitespace
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent, so `"12.5px"` reads as 12.5 and `"  -3e2%"` as -300.
fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
