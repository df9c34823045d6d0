//! Property-based tests for amount formatting.
//!
//! - Parsing formatted text returns the same amount
//! - Formatting never drops fraction digits

use proptest::prelude::*;
use rust_decimal::Decimal;

use moneta_shared::{CurrencyStyle, Money};

use super::locales::builtin_profiles;
use super::registry::FormatRegistry;

fn currency_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("EUR"),
        Just("USD"),
        Just("INR"),
        Just("CNY"),
        Just("JPY"),
        Just("BHD"),
        Just("BGN"),
    ]
}

/// Strategy to generate amounts with 0 to 4 fraction digits.
fn amount() -> impl Strategy<Value = Money> {
    (
        -1_000_000_000_000i64..1_000_000_000_000i64,
        0u32..=4,
        currency_code(),
    )
        .prop_map(|(m, scale, code)| Money::of(Decimal::new(m, scale), code).unwrap())
}

fn locale_tag() -> impl Strategy<Value = String> {
    let tags: Vec<String> = builtin_profiles().into_iter().map(|p| p.tag).collect();
    proptest::sample::select(tags)
}

fn style() -> impl Strategy<Value = CurrencyStyle> {
    prop_oneof![Just(CurrencyStyle::Code), Just(CurrencyStyle::Symbol)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_parse_inverts_format(amount in amount(), tag in locale_tag(), style in style()) {
        let registry = FormatRegistry::with_builtin_profiles();
        let format = registry.amount_format(&tag, style).unwrap();
        let text = format.format(&amount);
        let parsed = format.parse(&text);
        prop_assert_eq!(parsed, Ok(amount.clone()), "{} via {}", text, tag);
    }

    #[test]
    fn prop_format_keeps_scale(amount in amount(), tag in locale_tag()) {
        let registry = FormatRegistry::with_builtin_profiles();
        let format = registry.amount_format(&tag, CurrencyStyle::Code).unwrap();
        let parsed = format.parse(&format.format(&amount)).unwrap();
        prop_assert!(parsed.scale() >= amount.scale());
    }
}
