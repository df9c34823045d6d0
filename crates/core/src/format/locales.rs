//! Built-in locale profiles.

use std::collections::BTreeMap;

use super::profile::{CurrencyPlacement, Grouping, LocaleProfile, NBSP, NegativePattern};

fn symbols(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(code, symbol)| ((*code).to_string(), (*symbol).to_string()))
        .collect()
}

/// English (United States): `USD 14,000.12`, `$14,000.12`.
#[must_use]
pub fn en_us() -> LocaleProfile {
    LocaleProfile {
        tag: "en-US".into(),
        decimal_separator: '.',
        grouping_separator: ',',
        grouping: Grouping::uniform(3),
        code_placement: CurrencyPlacement::prefix(Some(' ')),
        symbol_placement: CurrencyPlacement::prefix(None),
        negative: NegativePattern::MinusSign,
        symbols: symbols(&[("USD", "$"), ("EUR", "€"), ("GBP", "£"), ("JPY", "¥")]),
    }
}

/// English (India): `INR 6,78,90,00,00,00,000.00`.
#[must_use]
pub fn en_in() -> LocaleProfile {
    LocaleProfile {
        tag: "en-IN".into(),
        decimal_separator: '.',
        grouping_separator: ',',
        grouping: Grouping::new(3, 2),
        code_placement: CurrencyPlacement::prefix(Some(' ')),
        symbol_placement: CurrencyPlacement::prefix(None),
        negative: NegativePattern::MinusSign,
        symbols: symbols(&[("INR", "₹"), ("USD", "$")]),
    }
}

/// French (France): `14 000,12 EUR`.
#[must_use]
pub fn fr_fr() -> LocaleProfile {
    LocaleProfile {
        tag: "fr-FR".into(),
        decimal_separator: ',',
        grouping_separator: ' ',
        grouping: Grouping::uniform(3),
        code_placement: CurrencyPlacement::suffix(Some(' ')),
        symbol_placement: CurrencyPlacement::suffix(Some(' ')),
        negative: NegativePattern::MinusSign,
        symbols: symbols(&[("EUR", "€"), ("CHF", "CHF")]),
    }
}

/// German (Germany): `14.000,12 EUR`.
#[must_use]
pub fn de_de() -> LocaleProfile {
    LocaleProfile {
        tag: "de-DE".into(),
        decimal_separator: ',',
        grouping_separator: '.',
        grouping: Grouping::uniform(3),
        code_placement: CurrencyPlacement::suffix(Some(' ')),
        symbol_placement: CurrencyPlacement::suffix(Some(NBSP)),
        negative: NegativePattern::MinusSign,
        symbols: symbols(&[("EUR", "€")]),
    }
}

/// German (Switzerland): `CHF 14’000.12`.
#[must_use]
pub fn de_ch() -> LocaleProfile {
    LocaleProfile {
        tag: "de-CH".into(),
        decimal_separator: '.',
        grouping_separator: '\u{2019}',
        grouping: Grouping::uniform(3),
        code_placement: CurrencyPlacement::prefix(Some(' ')),
        symbol_placement: CurrencyPlacement::prefix(Some(' ')),
        negative: NegativePattern::MinusSign,
        symbols: symbols(&[("CHF", "CHF"), ("EUR", "€")]),
    }
}

/// Danish: `14.000,12 DKK`.
#[must_use]
pub fn da() -> LocaleProfile {
    LocaleProfile {
        tag: "da".into(),
        decimal_separator: ',',
        grouping_separator: '.',
        grouping: Grouping::uniform(3),
        code_placement: CurrencyPlacement::suffix(Some(' ')),
        symbol_placement: CurrencyPlacement::suffix(Some(NBSP)),
        negative: NegativePattern::MinusSign,
        symbols: symbols(&[("DKK", "kr.")]),
    }
}

/// Bulgarian (Bulgaria): `14 000,12 BGN` with no-break spaces.
#[must_use]
pub fn bg_bg() -> LocaleProfile {
    LocaleProfile {
        tag: "bg-BG".into(),
        decimal_separator: ',',
        grouping_separator: NBSP,
        grouping: Grouping::uniform(3),
        code_placement: CurrencyPlacement::suffix(Some(NBSP)),
        symbol_placement: CurrencyPlacement::suffix(Some(NBSP)),
        negative: NegativePattern::MinusSign,
        symbols: symbols(&[("BGN", "лв."), ("EUR", "€")]),
    }
}

/// Chinese (China): `CNY14,000.12`, `¥14,000.12`.
#[must_use]
pub fn zh_cn() -> LocaleProfile {
    LocaleProfile {
        tag: "zh-CN".into(),
        decimal_separator: '.',
        grouping_separator: ',',
        grouping: Grouping::uniform(3),
        code_placement: CurrencyPlacement::prefix(None),
        symbol_placement: CurrencyPlacement::prefix(None),
        negative: NegativePattern::MinusSign,
        symbols: symbols(&[("CNY", "¥"), ("USD", "US$")]),
    }
}

/// English (United States), accounting: `(USD 14,000.12)` for negatives.
#[must_use]
pub fn en_us_accounting() -> LocaleProfile {
    LocaleProfile {
        tag: "en-US-accounting".into(),
        negative: NegativePattern::Parentheses,
        ..en_us()
    }
}

/// All built-in profiles.
#[must_use]
pub fn builtin_profiles() -> Vec<LocaleProfile> {
    vec![
        en_us(),
        en_in(),
        fr_fr(),
        de_de(),
        de_ch(),
        da(),
        bg_bg(),
        zh_cn(),
        en_us_accounting(),
    ]
}
