//! Locale formatting and parsing through the public registry.
//!
//! Covers the reference locales: French, Chinese, Indian grouping, Danish,
//! Bulgarian and German, including the interchangeable space glyphs.

use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use moneta_core::format::{FormatError, NBSP, NNBSP, STRUCTURAL_ERROR_INDEX};
use moneta_core::{AmountFormat, FormatRegistry};
use moneta_shared::{CurrencyCatalog, CurrencyStyle, IsoCurrencyCatalog, Money};

fn code_format(tag: &str) -> AmountFormat {
    FormatRegistry::with_builtin_profiles()
        .amount_format(tag, CurrencyStyle::Code)
        .unwrap()
}

fn money(amount: Decimal, code: &str) -> Money {
    Money::of(amount, code).unwrap()
}

#[test]
fn test_parse_french() {
    assert_eq!(
        code_format("fr-FR").parse("123,01 EUR").unwrap(),
        money(dec!(123.01), "EUR")
    );
}

#[test]
fn test_format_french() {
    assert_eq!(
        code_format("fr-FR").format(&money(dec!(14000.12), "EUR")),
        "14 000,12 EUR"
    );
}

#[test]
fn test_parse_chinese() {
    assert_eq!(
        code_format("zh-CN").parse("CNY14,000.12").unwrap(),
        money(dec!(14000.12), "CNY")
    );
}

#[test]
fn test_parse_indian_grouping() {
    let parsed = code_format("en-IN")
        .parse("INR 6,78,90,00,00,00,000.00")
        .unwrap();
    assert_eq!(parsed, money(dec!(67890000000000), "INR"));
    assert_eq!(
        code_format("en-IN").format(&parsed),
        "INR 6,78,90,00,00,00,000.00"
    );
}

#[rstest]
#[case("da", "14.000,12 DKK", dec!(14000.12), "DKK")]
#[case("da-DK", "1.234,5 DKK", dec!(1234.5), "DKK")]
#[case("de-DE", "14.000,12 EUR", dec!(14000.12), "EUR")]
#[case("de-DE", "14.000,12\u{A0}EUR", dec!(14000.12), "EUR")]
#[case("bg-BG", "14\u{A0}000,12\u{A0}BGN", dec!(14000.12), "BGN")]
#[case("bg-BG", "14\u{202F}000,12\u{202F}BGN", dec!(14000.12), "BGN")]
#[case("bg-BG", "14 000,12 BGN", dec!(14000.12), "BGN")]
fn test_parse_space_variants(
    #[case] tag: &str,
    #[case] text: &str,
    #[case] amount: Decimal,
    #[case] code: &str,
) {
    assert_eq!(code_format(tag).parse(text).unwrap(), money(amount, code));
}

#[test]
fn test_bulgarian_uses_no_break_space() {
    let text = code_format("bg-BG").format(&money(dec!(14000.12), "BGN"));
    assert_eq!(text, format!("14{NBSP}000,12{NBSP}BGN"));
    assert!(!text.contains(NNBSP));
}

#[test]
fn test_missing_currency_fails_structurally() {
    let err = code_format("fr-FR").parse("123,01").unwrap_err();
    assert_eq!(err.error_index(), Some(STRUCTURAL_ERROR_INDEX));
    assert!(matches!(err, FormatError::Parse { .. }));
    assert!(err.to_string().contains("CurrencyUnit"));
}

#[test]
fn test_bound_currency_parses_number_alone() {
    let chf = IsoCurrencyCatalog.lookup("CHF").unwrap();
    let format = code_format("de-CH").with_currency(chf);
    assert_eq!(
        format.parse("14\u{2019}000.12").unwrap(),
        money(dec!(14000.12), "CHF")
    );
}

#[test]
fn test_trailing_garbage_reports_position() {
    let err = code_format("en-US").parse("USD 12.00!").unwrap_err();
    assert_eq!(err.error_index(), Some(9));
}

#[test]
fn test_symbol_style() {
    let format = FormatRegistry::with_builtin_profiles()
        .amount_format("fr-FR", CurrencyStyle::Symbol)
        .unwrap();
    let amount = money(dec!(-14000.12), "EUR");
    let text = format.format(&amount);
    assert_eq!(text, "-14 000,12 €");
    assert_eq!(format.parse(&text).unwrap(), amount);
}
