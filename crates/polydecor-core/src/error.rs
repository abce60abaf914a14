//! Error handling for polydecor
//!
//! Provides the error types for the layers of the workspace:
//! - Pattern errors (offset/repeat value parsing)
//! - Geometry errors (coordinates that cannot be projected)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Pattern error type
///
/// Raised while turning raw pattern definitions into resolved values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// A pattern value is neither a number nor a percentage
    #[error("Invalid pattern value '{raw}': {reason}")]
    InvalidPatternValue {
        /// The raw input as written by the caller.
        raw: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A named pattern field could not be parsed
    #[error("Invalid pattern field '{field}': {source}")]
    InvalidField {
        /// The field name (offset, endOffset, repeat).
        field: &'static str,
        /// The underlying value error.
        #[source]
        source: Box<PatternError>,
    },
}

impl PatternError {
    /// Create an invalid value error
    pub fn invalid_value(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        PatternError::InvalidPatternValue {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Attach the pattern field name to a value error
    pub fn in_field(self, field: &'static str) -> Self {
        PatternError::InvalidField {
            field,
            source: Box::new(self),
        }
    }
}

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate is NaN or infinite
    #[error("Non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// The first component (x or latitude).
        x: f64,
        /// The second component (y or longitude).
        y: f64,
    },

    /// A latitude lies outside [-90, 90]
    #[error("Latitude {lat} out of range [-90, 90]")]
    LatitudeOutOfRange {
        /// The offending latitude.
        lat: f64,
    },
}

/// Main error type for polydecor
///
/// A unified error type that can represent any error from the library
/// crates. This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Pattern error
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl Error {
    /// Check if this is a pattern error
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, Error::Pattern(_))
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
