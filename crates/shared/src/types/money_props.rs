//! Property-based tests for money arithmetic.
//!
//! - Add/subtract inverse law
//! - Currency preservation of scalar operations

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::money::Money;

/// Strategy to generate decimal amounts across the full scale range.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=28)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate non-zero factors.
fn non_zero_factor() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64, 0u32..=3, any::<bool>()).prop_map(|(m, scale, neg)| {
        let factor = Decimal::new(m, scale);
        if neg { -factor } else { factor }
    })
}

fn money(amount: Decimal, code: &str) -> Money {
    Money::of(amount, code).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* a and b of one currency, (a + b) - b == a whenever the
    /// sum is accepted; an inexact sum is an error, never a rounded value.
    #[test]
    fn prop_add_then_subtract_is_identity(a in any_amount(), b in any_amount()) {
        let a = money(a, "EUR");
        let b = money(b, "EUR");
        if let Ok(sum) = a.add(&b) {
            prop_assert_eq!(sum.subtract(&b).unwrap(), a);
        }
    }

    /// Small operands at any scale add exactly.
    #[test]
    fn prop_small_operands_add_exactly(
        a in -1_000_000i64..1_000_000i64,
        b in -1_000_000i64..1_000_000i64,
        scale in 0u32..=20,
    ) {
        let x = money(Decimal::new(a, scale), "EUR");
        let y = money(Decimal::new(b, scale), "EUR");
        prop_assert_eq!(x.add(&y).unwrap().amount(), Decimal::new(a + b, scale));
    }

    /// Scalar operations never change the currency.
    #[test]
    fn prop_scalar_ops_keep_currency(a in any_amount(), factor in non_zero_factor()) {
        let a = money(a, "CHF");
        let product = a.multiply(factor).unwrap();
        prop_assert_eq!(product.currency(), a.currency());
        let quotient = a.divide(factor).unwrap();
        prop_assert_eq!(quotient.currency(), a.currency());
    }

    /// Addition is commutative.
    #[test]
    fn prop_add_commutative(a in any_amount(), b in any_amount()) {
        let a = money(a, "USD");
        let b = money(b, "USD");
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    /// Mixed currencies always fail.
    #[test]
    fn prop_mixed_currency_rejected(a in any_amount(), b in any_amount()) {
        let a = money(a, "USD");
        let b = money(b, "EUR");
        prop_assert!(a.add(&b).is_err());
        prop_assert!(a.subtract(&b).is_err());
        prop_assert!(a.compare(&b).is_err());
    }
}
