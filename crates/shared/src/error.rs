//! Monetary error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Binary operation between amounts of different currencies.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency of the receiving amount.
        expected: String,
        /// Currency of the operand.
        found: String,
    },

    /// Currency code not known to the catalog.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Division by a zero factor.
    #[error("Division by zero")]
    DivisionByZero,

    /// Result does not fit the decimal representation.
    #[error("Decimal overflow in {operation}")]
    Overflow {
        /// Name of the failing operation.
        operation: &'static str,
    },
}

impl MoneyError {
    /// Builds a mismatch error from two currency codes.
    #[must_use]
    pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow { .. } => "OVERFLOW",
        }
    }
}
