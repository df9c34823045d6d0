//! Whole/fraction extraction operators.

use moneta_shared::{MonetaryOperator, Money, MoneyResult};

/// Extracts the fractional part of an amount, keeping its sign and scale.
///
/// `EUR 2.35` becomes `EUR 0.35`, `BHD -1.345` becomes `BHD -0.345`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinorPart;

impl MonetaryOperator for MinorPart {
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        // trunc() rounds toward zero, so a negative amount keeps a negative minor part
        let wholes = amount.with_amount(amount.amount().trunc());
        amount.subtract(&wholes)
    }
}

/// Extracts the whole part of an amount, truncating toward zero.
///
/// `EUR 2.35` becomes `EUR 2`, `BHD -1.345` becomes `BHD -1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MajorPart;

impl MonetaryOperator for MajorPart {
    fn apply(&self, amount: &Money) -> MoneyResult<Money> {
        Ok(amount.with_amount(amount.amount().trunc()))
    }
}

/// Returns the minor part extractor.
#[must_use]
pub const fn minor_part() -> MinorPart {
    MinorPart
}

/// Returns the major part extractor.
#[must_use]
pub const fn major_part() -> MajorPart {
    MajorPart
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("EUR", dec!(2.35), dec!(0.35))]
    #[case("BHD", dec!(-1.345), dec!(-0.345))]
    #[case("EUR", dec!(7), dec!(0))]
    #[case("EUR", dec!(-0.99), dec!(-0.99))]
    #[case("JPY", dec!(0), dec!(0))]
    fn test_minor_part(#[case] code: &str, #[case] amount: Decimal, #[case] expected: Decimal) {
        let money = Money::of(amount, code).unwrap();
        let minor = money.with(&minor_part()).unwrap();
        assert_eq!(minor.amount(), expected);
        assert_eq!(minor.currency(), money.currency());
    }

    #[test]
    fn test_minor_part_never_positive_for_negative_amounts() {
        let minor = Money::of(dec!(-3.01), "USD").unwrap().with(&MinorPart).unwrap();
        assert!(minor.is_negative());
    }

    #[test]
    fn test_minor_part_keeps_scale() {
        let minor = Money::of(dec!(2.350), "EUR").unwrap().with(&MinorPart).unwrap();
        assert_eq!(minor.scale(), 3);
    }

    #[rstest]
    #[case(dec!(2.35), dec!(2))]
    #[case(dec!(-1.345), dec!(-1))]
    #[case(dec!(0.5), dec!(0))]
    fn test_major_part(#[case] amount: Decimal, #[case] expected: Decimal) {
        let money = Money::of(amount, "EUR").unwrap();
        assert_eq!(money.with(&major_part()).unwrap().amount(), expected);
    }

    #[test]
    fn test_major_plus_minor_is_whole_amount() {
        let money = Money::of(dec!(-12.3456), "BHD").unwrap();
        let major = money.with(&MajorPart).unwrap();
        let minor = money.with(&MinorPart).unwrap();
        assert_eq!(major.add(&minor).unwrap(), money);
    }
}
