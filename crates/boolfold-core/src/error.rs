//! Error types for BoolFold
//!
//! Failures raised by conditions themselves are never wrapped in these
//! types; they are handed back to the caller as-is.

use thiserror::Error;

/// Errors raised by the folds themselves
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldError {
    #[error("No conditions supplied to `{0}`")]
    NoConditions(&'static str),
}

/// Result type for fold operations
pub type FoldResult<T> = Result<T, FoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_conditions_display() {
        let err = FoldError::NoConditions("all");
        assert_eq!(err.to_string(), "No conditions supplied to `all`");
    }
}
