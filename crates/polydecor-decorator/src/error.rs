//! Decorator errors

use polydecor_core::PatternError;
use thiserror::Error;

/// Decorator error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecoratorError {
    /// A pattern definition failed to parse
    #[error("Pattern #{index} is invalid: {source}")]
    InvalidPattern {
        /// Position of the definition in the caller's list.
        index: usize,
        /// The underlying parse error.
        #[source]
        source: PatternError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_index() {
        let err = DecoratorError::InvalidPattern {
            index: 2,
            source: PatternError::invalid_value("abc", "not a number").in_field("repeat"),
        };
        let text = err.to_string();
        assert!(text.starts_with("Pattern #2 is invalid"));
        assert!(text.contains("repeat"));
    }
}
