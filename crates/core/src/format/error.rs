//! Amount format error types.

use thiserror::Error;

use moneta_shared::MoneyError;

/// Result type alias using `FormatError`.
pub type FormatResult<T> = Result<T, FormatError>;

/// Error index used when a failure has no position in the input.
pub const STRUCTURAL_ERROR_INDEX: isize = -1;

/// Errors raised when parsing amount text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input does not match the locale grammar.
    #[error("{message}")]
    Parse {
        /// Human-readable diagnostic.
        message: String,
        /// Character offset of the failure, or -1 for structural failures.
        error_index: isize,
    },

    /// Currency token could not be resolved.
    #[error(transparent)]
    Currency(#[from] MoneyError),
}

impl FormatError {
    /// Builds a parse error at a character offset.
    #[must_use]
    pub fn at(message: impl Into<String>, index: usize) -> Self {
        Self::Parse {
            message: message.into(),
            error_index: isize::try_from(index).unwrap_or(isize::MAX),
        }
    }

    /// Builds a parse error without a position.
    #[must_use]
    pub fn structural(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            error_index: STRUCTURAL_ERROR_INDEX,
        }
    }

    /// Returns the error index of a parse failure.
    #[must_use]
    pub const fn error_index(&self) -> Option<isize> {
        match self {
            Self::Parse { error_index, .. } => Some(*error_index),
            Self::Currency(_) => None,
        }
    }
}
