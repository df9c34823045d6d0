//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` and never rounds implicitly;
//! any truncation goes through an explicit `MonetaryOperator`.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};
use crate::types::currency::{CurrencyCatalog, CurrencyUnit, IsoCurrencyCatalog};
use crate::types::operator::MonetaryOperator;

/// Represents an immutable monetary amount with currency.
///
/// Every operation returns a new instance. Binary operations between two
/// amounts require the same currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyUnit,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyUnit) -> Self {
        Self { amount, currency }
    }

    /// Creates a Money instance from an ISO currency code.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` if the code is not in the ISO table.
    pub fn of(amount: Decimal, code: &str) -> MoneyResult<Self> {
        Ok(Self::new(amount, IsoCurrencyCatalog.lookup(code)?))
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: CurrencyUnit) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Creates a new amount with the same currency and another number.
    #[must_use]
    pub fn with_amount(&self, amount: Decimal) -> Self {
        Self::new(amount, self.currency.clone())
    }

    /// Returns the decimal magnitude.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyUnit {
        &self.currency
    }

    /// Returns the number of fraction digits of the magnitude.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.amount.scale()
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.amount.is_zero() && self.amount.is_sign_positive()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.amount.is_zero() && self.amount.is_sign_negative()
    }

    /// Returns -1, 0 or 1.
    #[must_use]
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.amount.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::mismatch(
                self.currency.code(),
                other.currency.code(),
            ))
        }
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` for different currencies, `Overflow` if the
    /// exact sum does not fit the 96-bit mantissa.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let sum = self.amount.checked_add(other.amount);
        self.exact_result(other, sum, "add")
    }

    /// Subtracts an amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` for different currencies, `Overflow` if the
    /// exact difference does not fit the 96-bit mantissa.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let diff = self.amount.checked_sub(other.amount);
        self.exact_result(other, diff, "subtract")
    }

    /// Accepts an add/subtract result only if no fraction digit was dropped.
    ///
    /// rust_decimal keeps the operand scale unless the aligned mantissa no
    /// longer fits 96 bits, in which case it rounds to a smaller scale.
    fn exact_result(
        &self,
        other: &Self,
        result: Option<Decimal>,
        operation: &'static str,
    ) -> MoneyResult<Self> {
        let overflow = MoneyError::Overflow { operation };
        let result = result.ok_or_else(|| overflow.clone())?;
        let scale = self.scale().max(other.scale());
        // a zero operand returns the other operand untouched, scale included
        if self.is_zero() || other.is_zero() || result.scale() >= scale {
            Ok(self.with_amount(result))
        } else {
            Err(overflow)
        }
    }

    /// Multiplies by a dimensionless factor.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the product cannot be represented.
    pub fn multiply(&self, factor: Decimal) -> MoneyResult<Self> {
        self.amount
            .checked_mul(factor)
            .map(|product| self.with_amount(product))
            .ok_or(MoneyError::Overflow {
                operation: "multiply",
            })
    }

    /// Divides by a dimensionless factor.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a zero divisor, `Overflow` if the
    /// quotient cannot be represented.
    pub fn divide(&self, divisor: Decimal) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(divisor)
            .map(|quotient| self.with_amount(quotient))
            .ok_or(MoneyError::Overflow {
                operation: "divide",
            })
    }

    /// Returns the remainder of dividing by a dimensionless factor.
    ///
    /// The sign of the result follows the sign of this amount.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a zero divisor.
    pub fn remainder(&self, divisor: Decimal) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_rem(divisor)
            .map(|rem| self.with_amount(rem))
            .ok_or(MoneyError::Overflow {
                operation: "remainder",
            })
    }

    /// Returns the amount with the sign flipped.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_amount(-self.amount)
    }

    /// Returns the absolute amount.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_amount(self.amount.abs())
    }

    /// Returns the amount without trailing fractional zeros.
    #[must_use]
    pub fn strip_trailing_zeros(&self) -> Self {
        self.with_amount(self.amount.normalize())
    }

    /// Compares two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` for different currencies.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Returns true if this amount is greater than `other`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` for different currencies.
    pub fn is_greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Returns true if this amount is greater than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` for different currencies.
    pub fn is_greater_than_or_equal_to(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// Returns true if this amount is less than `other`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` for different currencies.
    pub fn is_less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Returns true if this amount is less than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` for different currencies.
    pub fn is_less_than_or_equal_to(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Applies an operator and returns its result unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the operator's error.
    pub fn with<O: MonetaryOperator + ?Sized>(&self, operator: &O) -> MoneyResult<Self> {
        operator.apply(self)
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Neg for &Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn eur(amount: Decimal) -> Money {
        Money::of(amount, "EUR").unwrap()
    }

    #[test]
    fn test_money_of() {
        let money = eur(dec!(100.00));
        assert_eq!(money.amount(), dec!(100.00));
        assert_eq!(money.currency().code(), "EUR");
        assert_eq!(
            Money::of(dec!(1), "NOPE").unwrap_err(),
            MoneyError::UnknownCurrency("NOPE".into())
        );
    }

    #[test]
    fn test_money_zero() {
        let money = Money::zero(IsoCurrencyCatalog.lookup("IDR").unwrap());
        assert!(money.is_zero());
        assert_eq!(money.signum(), 0);
        assert!(!money.is_negative());
        assert!(!money.is_positive());
    }

    #[test]
    fn test_sign_queries() {
        assert!(eur(dec!(10)).is_positive());
        assert!(eur(dec!(-10)).is_negative());
        assert_eq!(eur(dec!(-0.01)).signum(), -1);
        assert_eq!(eur(dec!(0.01)).signum(), 1);
    }

    #[test]
    fn test_add_subtract() {
        let a = eur(dec!(1234567.3444));
        let b = eur(dec!(232323));
        assert_eq!(a.add(&b).unwrap().amount(), dec!(1466890.3444));
        assert_eq!(a.subtract(&b).unwrap().amount(), dec!(1002244.3444));
    }

    #[test]
    fn test_currency_mismatch() {
        let a = eur(dec!(1));
        let b = Money::of(dec!(1), "USD").unwrap();
        let expected = MoneyError::mismatch("EUR", "USD");
        assert_eq!(a.add(&b).unwrap_err(), expected);
        assert_eq!(a.subtract(&b).unwrap_err(), expected);
        assert_eq!(a.compare(&b).unwrap_err(), expected);
        assert!(a.is_greater_than(&b).is_err());
    }

    #[test]
    fn test_multiply_divide_keep_currency() {
        let a = eur(dec!(10.50));
        let product = a.multiply(dec!(3.4)).unwrap();
        assert_eq!(product.amount(), dec!(35.700));
        assert_eq!(product.currency(), a.currency());

        let quotient = a.divide(dec!(4)).unwrap();
        assert_eq!(quotient.amount(), dec!(2.625));
        assert_eq!(quotient.currency(), a.currency());
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            eur(dec!(1)).divide(Decimal::ZERO).unwrap_err(),
            MoneyError::DivisionByZero
        );
        assert_eq!(
            eur(dec!(1)).remainder(Decimal::ZERO).unwrap_err(),
            MoneyError::DivisionByZero
        );
    }

    #[test]
    fn test_overflow() {
        let max = eur(Decimal::MAX);
        assert_eq!(
            max.add(&max).unwrap_err(),
            MoneyError::Overflow { operation: "add" }
        );
        assert_eq!(
            max.multiply(dec!(2)).unwrap_err(),
            MoneyError::Overflow {
                operation: "multiply"
            }
        );
    }

    #[test]
    fn test_add_rejects_lost_fraction_digits() {
        let tiny = eur(Decimal::new(1, 28));
        let ten = eur(dec!(10));
        assert_eq!(
            tiny.add(&ten).unwrap_err(),
            MoneyError::Overflow { operation: "add" }
        );
        assert_eq!(
            tiny.subtract(&ten).unwrap_err(),
            MoneyError::Overflow {
                operation: "subtract"
            }
        );
        assert_eq!(
            eur(dec!(10)).add(&tiny).unwrap_err(),
            MoneyError::Overflow { operation: "add" }
        );
        assert_eq!(eur(dec!(5)).add(&eur(dec!(0.00))).unwrap().amount(), dec!(5));
        // exact at full scale still works
        let sum = tiny.add(&eur(Decimal::new(3, 28))).unwrap();
        assert_eq!(sum.amount(), Decimal::new(4, 28));
        assert_eq!(sum.subtract(&eur(Decimal::new(3, 28))).unwrap(), tiny);
    }

    #[test]
    fn test_remainder_follows_dividend_sign() {
        assert_eq!(eur(dec!(-1.27)).remainder(dec!(0.05)).unwrap().amount(), dec!(-0.02));
        assert_eq!(eur(dec!(1.27)).remainder(dec!(0.05)).unwrap().amount(), dec!(0.02));
    }

    #[test]
    fn test_comparisons() {
        let small = eur(dec!(0.03));
        let large = eur(dec!(0.030));
        assert!(small.is_greater_than_or_equal_to(&large).unwrap());
        assert!(small.is_less_than_or_equal_to(&large).unwrap());
        assert!(!small.is_greater_than(&large).unwrap());
        assert!(eur(dec!(0.02)).is_less_than(&small).unwrap());
        assert_eq!(small, large);
    }

    #[test]
    fn test_negate_abs_strip() {
        let a = eur(dec!(-2.500));
        assert_eq!((-a.clone()).amount(), dec!(2.500));
        assert_eq!(a.abs().amount(), dec!(2.5));
        assert_eq!(a.strip_trailing_zeros().scale(), 1);
    }

    #[test]
    fn test_with_operator() {
        let double = |m: &Money| m.multiply(dec!(2));
        assert_eq!(eur(dec!(1.5)).with(&double).unwrap().amount(), dec!(3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(eur(dec!(14000.12)).to_string(), "EUR 14000.12");
    }

    #[test]
    fn test_serde_round_trip() {
        let a = eur(dec!(123.01));
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"amount":"123.01","currency":"EUR"}"#);
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
