//! Locale-driven amount formatting and parsing.
//!
//! One engine interprets every `LocaleProfile`. Formatting never rounds:
//! the amount is shown with `max(currency digits, amount scale)` fraction
//! digits. Parsing is tolerant of zero padding, omitted grouping and any
//! space glyph where the profile expects one.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use moneta_shared::{CurrencyCatalog, CurrencyStyle, CurrencyUnit, IsoCurrencyCatalog, Money};

use super::error::{FormatError, FormatResult};
use super::profile::{CurrencyPosition, LocaleProfile, NegativePattern, is_space_glyph};

/// Formats and parses amounts for one locale profile and currency style.
#[derive(Clone)]
pub struct AmountFormat {
    profile: Arc<LocaleProfile>,
    style: CurrencyStyle,
    currency: Option<CurrencyUnit>,
    catalog: Arc<dyn CurrencyCatalog>,
}

impl AmountFormat {
    /// Creates a format resolving currency tokens against the ISO table.
    #[must_use]
    pub fn new(profile: Arc<LocaleProfile>, style: CurrencyStyle) -> Self {
        Self {
            profile,
            style,
            currency: None,
            catalog: Arc::new(IsoCurrencyCatalog),
        }
    }

    /// Binds the format to a currency, used when parsed text has no token.
    #[must_use]
    pub fn with_currency(mut self, currency: CurrencyUnit) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Replaces the catalog used to resolve parsed currency tokens.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<dyn CurrencyCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Returns the locale profile.
    #[must_use]
    pub fn profile(&self) -> &LocaleProfile {
        &self.profile
    }

    /// Returns the currency style.
    #[must_use]
    pub const fn style(&self) -> CurrencyStyle {
        self.style
    }

    /// Returns the bound currency, if any.
    #[must_use]
    pub const fn currency(&self) -> Option<&CurrencyUnit> {
        self.currency.as_ref()
    }

    fn currency_token<'a>(&'a self, currency: &'a CurrencyUnit) -> &'a str {
        match self.style {
            CurrencyStyle::Code => currency.code(),
            CurrencyStyle::Symbol => self
                .profile
                .symbol(currency.code())
                .unwrap_or_else(|| currency.code()),
        }
    }

    /// Renders an amount as text.
    #[must_use]
    pub fn format(&self, money: &Money) -> String {
        let profile = &self.profile;
        let digits = money
            .currency()
            .default_fraction_digits()
            .max(money.scale());
        let mut magnitude = money.amount().abs();
        magnitude.rescale(digits);

        let plain = magnitude.to_string();
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let mut number = profile.grouping.apply(integer, profile.grouping_separator);
        if !fraction.is_empty() {
            number.push(profile.decimal_separator);
            number.push_str(fraction);
        }
        if money.is_negative() && profile.negative == NegativePattern::MinusSign {
            number.insert(0, '-');
        }

        let token = self.currency_token(money.currency());
        let placement = profile.placement(self.style);
        let mut out = String::with_capacity(number.len() + token.len() + 3);
        match placement.position {
            CurrencyPosition::Prefix => {
                out.push_str(token);
                out.extend(placement.spacing);
                out.push_str(&number);
            }
            CurrencyPosition::Suffix => {
                out.push_str(&number);
                out.extend(placement.spacing);
                out.push_str(token);
            }
        }

        if money.is_negative() && profile.negative == NegativePattern::Parentheses {
            format!("({out})")
        } else {
            out
        }
    }

    /// Parses text into an amount.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Parse` with the character offset of the failure,
    /// or index -1 when neither text nor format supply a currency.
    /// Returns `FormatError::Currency` when the currency token is unknown.
    pub fn parse(&self, text: &str) -> FormatResult<Money> {
        self.parse_text(text).inspect_err(|err| {
            debug!(
                locale = %self.profile.tag,
                error_index = ?err.error_index(),
                %err,
                "Failed to parse amount"
            );
        })
    }

    fn parse_text(&self, text: &str) -> FormatResult<Money> {
        let chars: Vec<char> = text.chars().collect();
        let mut cursor = Cursor {
            chars: &chars,
            pos: 0,
        };
        cursor.skip_spaces();

        let mut negative = false;
        let mut parenthesized = false;
        if cursor.eat('(') {
            parenthesized = true;
        } else if cursor.eat('-') {
            negative = true;
        }

        let mut token = self.read_token(&mut cursor);
        if token.is_some() {
            cursor.skip_spaces();
        }
        if !negative && !parenthesized && cursor.eat('-') {
            negative = true;
        }

        let number = self.read_number(&mut cursor)?;

        let before_suffix = cursor.pos;
        cursor.skip_spaces();
        if token.is_none() {
            token = self.read_token(&mut cursor);
        }
        if token.is_none() {
            cursor.pos = before_suffix;
        }
        cursor.skip_spaces();
        if parenthesized && !cursor.eat(')') {
            return Err(FormatError::at("Expected ')'", cursor.pos));
        }
        cursor.skip_spaces();
        if cursor.pos < chars.len() {
            return Err(FormatError::at("Unexpected character", cursor.pos));
        }

        let mut amount = Decimal::from_str_exact(&number.text)
            .map_err(|e| FormatError::at(format!("Invalid number: {e}"), number.start))?;
        if negative || parenthesized {
            amount.set_sign_negative(true);
        }

        let currency = self.resolve_currency(token)?;
        Ok(Money::new(amount, currency))
    }

    fn resolve_currency(&self, token: Option<Token>) -> FormatResult<CurrencyUnit> {
        match (token, &self.currency) {
            (Some(token), bound) => {
                let currency = self.catalog.lookup(&token.code)?;
                match bound {
                    Some(expected) if *expected != currency => Err(FormatError::at(
                        format!(
                            "Currency mismatch: expected {}, found {}",
                            expected.code(),
                            currency.code()
                        ),
                        token.start,
                    )),
                    _ => Ok(currency),
                }
            }
            (None, Some(bound)) => Ok(bound.clone()),
            (None, None) => Err(FormatError::structural(
                "Error parsing CurrencyUnit: no input.",
            )),
        }
    }

    /// Reads a currency symbol known to the profile or a run of ASCII letters.
    fn read_token(&self, cursor: &mut Cursor<'_>) -> Option<Token> {
        let start = cursor.pos;
        let symbol = self
            .profile
            .symbols
            .iter()
            .filter(|(_, symbol)| cursor.starts_with(symbol))
            .max_by_key(|(_, symbol)| symbol.chars().count());
        if let Some((code, symbol)) = symbol {
            cursor.pos += symbol.chars().count();
            return Some(Token {
                code: code.clone(),
                start,
            });
        }

        let code: String = cursor.take_while(|c| c.is_ascii_alphabetic());
        (!code.is_empty()).then_some(Token { code, start })
    }

    fn read_number(&self, cursor: &mut Cursor<'_>) -> FormatResult<Number> {
        let profile = &self.profile;
        let start = cursor.pos;
        let mut text = String::new();
        let mut groups = Vec::new();
        let mut separators = Vec::new();
        let mut group = 0usize;

        while let Some(c) = cursor.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                group += 1;
                cursor.pos += 1;
            } else if group > 0
                && profile.is_grouping_separator(c)
                && cursor.peek_at(1).is_some_and(|next| next.is_ascii_digit())
            {
                groups.push(group);
                separators.push(cursor.pos);
                group = 0;
                cursor.pos += 1;
            } else {
                break;
            }
        }
        if text.is_empty() {
            return Err(FormatError::at("Expected digits", cursor.pos));
        }
        if !separators.is_empty() {
            groups.push(group);
            // zero padding does not count towards the leading group
            let padding = text.chars().take_while(|&c| c == '0').count();
            groups[0] = groups[0].saturating_sub(padding).max(1);
            if let Some(invalid) = profile.grouping.first_invalid_group(&groups) {
                let at = separators[invalid.saturating_sub(1)];
                return Err(FormatError::at("Invalid digit grouping", at));
            }
        }

        if cursor.peek() == Some(profile.decimal_separator) {
            cursor.pos += 1;
            let fraction = cursor.take_while(|c| c.is_ascii_digit());
            if fraction.is_empty() {
                return Err(FormatError::at(
                    "Expected digits after decimal separator",
                    cursor.pos,
                ));
            }
            text.push('.');
            text.push_str(&fraction);
        }

        Ok(Number { text, start })
    }
}

impl std::fmt::Debug for AmountFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmountFormat")
            .field("locale", &self.profile.tag)
            .field("style", &self.style)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

struct Token {
    code: String,
    start: usize,
}

struct Number {
    text: String,
    start: usize,
}

struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_spaces(&mut self) {
        while self.peek().is_some_and(is_space_glyph) {
            self.pos += 1;
        }
    }

    fn starts_with(&self, s: &str) -> bool {
        let rest = self.chars.get(self.pos..).unwrap_or_default();
        let mut count = 0;
        for (i, c) in s.chars().enumerate() {
            if rest.get(i) != Some(&c) {
                return false;
            }
            count += 1;
        }
        count > 0
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek().filter(|&c| pred(c)) {
            out.push(c);
            self.pos += 1;
        }
        out
    }
}
