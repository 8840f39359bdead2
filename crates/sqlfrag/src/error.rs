//! Error types for sqlfrag

use thiserror::Error;

/// Result type alias for sqlfrag operations
pub type FragResult<T> = Result<T, FragError>;

/// Errors raised by the checked fragment constructors.
///
/// The default constructors never fail; these only surface through
/// [`crate::try_values`], [`crate::try_unnest`] and [`crate::Template::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragError {
    /// A row does not have the expected number of columns
    #[error("Ragged row {row}: expected {expected} columns, got {actual}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A template was built from zero literal pieces
    #[error("Template must contain at least one literal piece")]
    EmptyTemplate,

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl FragError {
    /// Create a ragged row error
    pub fn ragged_row(row: usize, expected: usize, actual: usize) -> Self {
        Self::RaggedRow {
            row,
            expected,
            actual,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a ragged row error
    pub fn is_ragged_row(&self) -> bool {
        matches!(self, Self::RaggedRow { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_row_message() {
        let err = FragError::ragged_row(2, 3, 1);
        assert!(err.is_ragged_row());
        assert_eq!(err.to_string(), "Ragged row 2: expected 3 columns, got 1");
    }

    #[test]
    fn validation_message() {
        let err = FragError::validation("no types");
        assert!(!err.is_ragged_row());
        assert_eq!(err.to_string(), "Validation error: no types");
    }
}
