//! The operator abstraction applied to money amounts.

use crate::error::MoneyResult;
use crate::types::money::Money;

/// A pure transformation from one amount to another.
///
/// Implementations must not have observable side effects. Closures with the
/// matching signature are operators too.
pub trait MonetaryOperator: Send + Sync {
    /// Transforms `amount` into a new amount.
    ///
    /// # Errors
    ///
    /// Returns a `MoneyError` when the transformation cannot be represented.
    fn apply(&self, amount: &Money) -> MoneyResult<Money>;
}

impl<F> MonetaryOperator for F
where
    F: Fn(&Money) -> MoneyResult<Money> + Send + Sync,
{
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        self(amount)
    }
}
