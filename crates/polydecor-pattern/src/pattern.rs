//! Pattern specifications
//!
//! A [`RawPatternSpec`] carries the values as the caller wrote them; parsing
//! it yields a [`PatternSpec`] whose fields are already in
//! relative-or-absolute form and can be handed to the projector.

use polydecor_core::{
    parse_relative_or_absolute_value, PatternError, RawPatternValue, RelativeOrAbsoluteValue,
};
use serde::{Deserialize, Serialize};

/// Parsed pattern: where placements start, where they stop, and their spacing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Distance from the path start to the first placement
    pub offset: RelativeOrAbsoluteValue,
    /// Minimum distance kept free before the path end
    pub end_offset: RelativeOrAbsoluteValue,
    /// Spacing between consecutive placements; zero or less places one symbol
    pub repeat: RelativeOrAbsoluteValue,
}

impl PatternSpec {
    pub fn new(
        offset: RelativeOrAbsoluteValue,
        end_offset: RelativeOrAbsoluteValue,
        repeat: RelativeOrAbsoluteValue,
    ) -> Self {
        Self {
            offset,
            end_offset,
            repeat,
        }
    }
}

/// Unparsed pattern values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawPatternSpec {
    #[serde(default, skip_serializing_if = "RawPatternValue::is_missing")]
    pub offset: RawPatternValue,
    #[serde(
        default,
        alias = "endOffset",
        skip_serializing_if = "RawPatternValue::is_missing"
    )]
    pub end_offset: RawPatternValue,
    #[serde(default, skip_serializing_if = "RawPatternValue::is_missing")]
    pub repeat: RawPatternValue,
}

impl RawPatternSpec {
    pub fn new(
        offset: impl Into<RawPatternValue>,
        end_offset: impl Into<RawPatternValue>,
        repeat: impl Into<RawPatternValue>,
    ) -> Self {
        Self {
            offset: offset.into(),
            end_offset: end_offset.into(),
            repeat: repeat.into(),
        }
    }

    /// Parse every field, naming the first field that fails
    pub fn parse(&self) -> Result<PatternSpec, PatternError> {
        Ok(PatternSpec {
            offset: parse_relative_or_absolute_value(&self.offset)
                .map_err(|e| e.in_field("offset"))?,
            end_offset: parse_relative_or_absolute_value(&self.end_offset)
                .map_err(|e| e.in_field("endOffset"))?,
            repeat: parse_relative_or_absolute_value(&self.repeat)
                .map_err(|e| e.in_field("repeat"))?,
        })
    }
}

impl TryFrom<&RawPatternSpec> for PatternSpec {
    type Error = PatternError;

    fn try_from(raw: &RawPatternSpec) -> Result<Self, Self::Error> {
        raw.parse()
    }
}
