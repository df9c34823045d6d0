//! Property-based tests for rounding policies.
//!
//! - Cash rounding lands on an increment boundary
//! - Cash rounding moves an amount by less than one increment, toward zero
//!   when negative
//! - Minor part keeps the sign of the amount

use proptest::prelude::*;
use rust_decimal::Decimal;

use moneta_shared::{Money, RoundingDirection};

use super::policy::{CashRounding, ScaleRounding};
use crate::operator::MinorPart;

/// Strategy to generate CHF amounts with 0 to 4 fraction digits.
fn chf_amount() -> impl Strategy<Value = Money> {
    (-100_000_000i64..100_000_000i64, 0u32..=4)
        .prop_map(|(m, scale)| Money::of(Decimal::new(m, scale), "CHF").unwrap())
}

fn direction() -> impl Strategy<Value = RoundingDirection> {
    prop_oneof![
        Just(RoundingDirection::Up),
        Just(RoundingDirection::Down),
        Just(RoundingDirection::Ceiling),
        Just(RoundingDirection::Floor),
        Just(RoundingDirection::HalfUp),
        Just(RoundingDirection::HalfDown),
        Just(RoundingDirection::HalfEven),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_cash_rounding_hits_increment(amount in chf_amount()) {
        let rounded = amount.with(&CashRounding::nickel()).unwrap();
        let rem = rounded.amount() % Decimal::new(5, 2);
        prop_assert!(rem.is_zero(), "{} is not a multiple of 0.05", rounded);
        prop_assert_eq!(rounded.currency(), amount.currency());
    }

    #[test]
    fn prop_cash_rounding_shift_is_bounded(amount in chf_amount()) {
        let cents = amount.with(&ScaleRounding::new(2, RoundingDirection::HalfUp)).unwrap();
        let rounded = amount.with(&CashRounding::nickel()).unwrap();
        let shift = rounded.amount() - cents.amount();
        if cents.is_negative() {
            // negative amounts only move toward zero
            prop_assert!(shift >= Decimal::ZERO && shift < Decimal::new(5, 2), "{} -> {}", cents, rounded);
        } else {
            prop_assert!(shift.abs() <= Decimal::new(2, 2), "{} -> {}", cents, rounded);
        }
    }

    #[test]
    fn prop_minor_part_sign(amount in chf_amount()) {
        let minor = amount.with(&MinorPart).unwrap();
        prop_assert!(minor.amount().abs() < Decimal::ONE);
        prop_assert!(!(amount.is_negative() && minor.is_positive()));
        prop_assert!(!(amount.is_positive() && minor.is_negative()));
    }

    #[test]
    fn prop_scale_rounding_bounds_scale(amount in chf_amount(), scale in 0u32..=3, dir in direction()) {
        let rounded = amount.with(&ScaleRounding::new(scale, dir)).unwrap();
        prop_assert!(rounded.scale() <= scale);
        prop_assert!((rounded.amount() - amount.amount()).abs() < Decimal::ONE);
    }
}
