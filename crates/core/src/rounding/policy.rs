//! Rounding policies.
//!
//! A `RoundingPolicy` pairs a `RoundingContext` with the operator doing the
//! actual work. The concrete operators here are the building blocks the
//! bundled providers hand out.

use std::sync::Arc;

use rust_decimal::Decimal;

use moneta_shared::{MonetaryOperator, Money, MoneyResult, RoundingDirection};

use super::context::RoundingContext;
use crate::operator::MinorPart;

/// A monetary operator specialised for rounding, carrying its identity.
#[derive(Clone)]
pub struct RoundingPolicy {
    context: RoundingContext,
    operator: Arc<dyn MonetaryOperator>,
}

impl RoundingPolicy {
    /// Creates a policy from its identity and the operator implementing it.
    pub fn new(context: RoundingContext, operator: impl MonetaryOperator + 'static) -> Self {
        Self {
            context,
            operator: Arc::new(operator),
        }
    }

    /// Returns the policy identity.
    #[must_use]
    pub const fn context(&self) -> &RoundingContext {
        &self.context
    }
}

impl MonetaryOperator for RoundingPolicy {
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        self.operator.apply(amount)
    }
}

impl PartialEq for RoundingPolicy {
    fn eq(&self, other: &Self) -> bool {
        self.context == other.context
    }
}

impl Eq for RoundingPolicy {}

impl std::fmt::Debug for RoundingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundingPolicy")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Rounds to a fixed number of fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleRounding {
    scale: u32,
    direction: RoundingDirection,
}

impl ScaleRounding {
    /// Creates a scale rounding.
    #[must_use]
    pub const fn new(scale: u32, direction: RoundingDirection) -> Self {
        Self { scale, direction }
    }

    /// Returns the target number of fraction digits.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns the rounding direction.
    #[must_use]
    pub const fn direction(&self) -> RoundingDirection {
        self.direction
    }
}

impl MonetaryOperator for ScaleRounding {
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        Ok(amount.with_amount(
            amount
                .amount()
                .round_dp_with_strategy(self.scale, self.direction.strategy()),
        ))
    }
}

/// Replaces the number with a constant, keeping the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRounding {
    value: Decimal,
}

impl FixedRounding {
    /// Creates a fixed-value rounding.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }
}

impl MonetaryOperator for FixedRounding {
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        Ok(amount.with_amount(self.value))
    }
}

/// Quantizes to the smallest circulating denomination.
///
/// First rounds half-up to `scale` digits, then moves the amount onto a
/// multiple of `increment`. The signed remainder of the minor part within
/// the increment decides: at least `threshold` rounds up to the next
/// boundary, anything below drops the remainder. A negative amount has a
/// non-positive remainder, so it always moves toward zero (`-1.03` becomes
/// `-1.00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashRounding {
    increment: Decimal,
    threshold: Decimal,
    scale: u32,
}

impl CashRounding {
    /// Creates a cash rounding.
    #[must_use]
    pub const fn new(increment: Decimal, threshold: Decimal, scale: u32) -> Self {
        Self {
            increment,
            threshold,
            scale,
        }
    }

    /// Five-cent rounding as used for Swiss francs.
    #[must_use]
    pub const fn nickel() -> Self {
        Self::new(
            Decimal::from_parts(5, 0, 0, false, 2),
            Decimal::from_parts(3, 0, 0, false, 2),
            2,
        )
    }

    /// Returns the quantization step.
    #[must_use]
    pub const fn increment(&self) -> Decimal {
        self.increment
    }

    /// Returns the round-up threshold.
    #[must_use]
    pub const fn threshold(&self) -> Decimal {
        self.threshold
    }
}

impl MonetaryOperator for CashRounding {
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        let rounded = amount.with(&ScaleRounding::new(self.scale, RoundingDirection::HalfUp))?;
        // signed remainder of the minor part within the current increment
        let remainder = rounded.with(&MinorPart)?.remainder(self.increment)?;
        let boundary = rounded.subtract(&remainder)?;

        let threshold = rounded.with_amount(self.threshold);
        if remainder.is_greater_than_or_equal_to(&threshold)? {
            boundary.add(&rounded.with_amount(self.increment))
        } else {
            Ok(boundary)
        }
    }
}
