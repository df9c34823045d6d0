//! Declarative locale profiles.
//!
//! A profile is pure data: separators, grouping sizes, where the currency
//! goes and how negatives look. One generic engine interprets all of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use moneta_shared::CurrencyStyle;

/// No-break space.
pub const NBSP: char = '\u{00A0}';

/// Narrow no-break space.
pub const NNBSP: char = '\u{202F}';

/// Returns true for the space glyphs treated as interchangeable when parsing.
#[must_use]
pub const fn is_space_glyph(c: char) -> bool {
    matches!(c, ' ' | NBSP | NNBSP | '\u{2007}' | '\u{2009}')
}

/// Digit grouping of the integer part.
///
/// `primary` is the size of the group next to the decimal separator,
/// `secondary` the size of every group further left. `en-IN` uses 3 then 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    /// Size of the rightmost group; 0 disables grouping.
    pub primary: usize,
    /// Size of the remaining groups; 0 means same as `primary`.
    #[serde(default)]
    pub secondary: usize,
}

impl Grouping {
    /// No grouping.
    pub const NONE: Self = Self::new(0, 0);

    /// Creates an irregular grouping.
    #[must_use]
    pub const fn new(primary: usize, secondary: usize) -> Self {
        Self { primary, secondary }
    }

    /// Creates a grouping with equal group sizes.
    #[must_use]
    pub const fn uniform(size: usize) -> Self {
        Self::new(size, size)
    }

    const fn secondary_size(&self) -> usize {
        if self.secondary == 0 {
            self.primary
        } else {
            self.secondary
        }
    }

    /// Inserts `separator` into a string of ASCII digits.
    #[must_use]
    pub fn apply(&self, digits: &str, separator: char) -> String {
        if self.primary == 0 || digits.len() <= self.primary {
            return digits.to_string();
        }
        let (mut rest, tail) = digits.split_at(digits.len() - self.primary);
        let mut groups = vec![tail];
        let size = self.secondary_size();
        while rest.len() > size {
            let (head, group) = rest.split_at(rest.len() - size);
            groups.push(group);
            rest = head;
        }
        groups.push(rest);
        groups.reverse();

        let mut out = String::with_capacity(digits.len() + groups.len());
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(group);
        }
        out
    }

    /// Checks group lengths read from input, left to right.
    ///
    /// Returns the index of the first group at a position this grouping
    /// does not allow.
    #[must_use]
    pub fn first_invalid_group(&self, groups: &[usize]) -> Option<usize> {
        let n = groups.len();
        if n <= 1 {
            return None;
        }
        if self.primary == 0 {
            return Some(0);
        }
        let size = self.secondary_size();
        if groups[0] == 0 || groups[0] > size {
            return Some(0);
        }
        if let Some(i) = (1..n - 1).find(|&i| groups[i] != size) {
            return Some(i);
        }
        (groups[n - 1] != self.primary).then_some(n - 1)
    }
}

/// Side of the number the currency goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPosition {
    /// Before the number.
    Prefix,
    /// After the number.
    Suffix,
}

/// Currency placement and the glyph separating it from the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPlacement {
    /// Side of the number.
    pub position: CurrencyPosition,
    /// Glyph between currency and number, if any.
    #[serde(default)]
    pub spacing: Option<char>,
}

impl CurrencyPlacement {
    /// Currency before the number.
    #[must_use]
    pub const fn prefix(spacing: Option<char>) -> Self {
        Self {
            position: CurrencyPosition::Prefix,
            spacing,
        }
    }

    /// Currency after the number.
    #[must_use]
    pub const fn suffix(spacing: Option<char>) -> Self {
        Self {
            position: CurrencyPosition::Suffix,
            spacing,
        }
    }
}

/// How negative amounts are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativePattern {
    /// Leading hyphen-minus before the whole amount.
    #[default]
    MinusSign,
    /// Whole amount wrapped in parentheses.
    Parentheses,
}

/// Textual grammar of amounts for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleProfile {
    /// Locale tag, e.g. "fr-FR".
    pub tag: String,
    /// Decimal separator glyph.
    pub decimal_separator: char,
    /// Grouping separator glyph.
    pub grouping_separator: char,
    /// Group sizes.
    pub grouping: Grouping,
    /// Placement with `CurrencyStyle::Code`.
    pub code_placement: CurrencyPlacement,
    /// Placement with `CurrencyStyle::Symbol`.
    pub symbol_placement: CurrencyPlacement,
    /// Negative amount rule.
    #[serde(default)]
    pub negative: NegativePattern,
    /// Currency code to symbol.
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,
}

impl LocaleProfile {
    /// Returns the placement for a style.
    #[must_use]
    pub const fn placement(&self, style: CurrencyStyle) -> CurrencyPlacement {
        match style {
            CurrencyStyle::Code => self.code_placement,
            CurrencyStyle::Symbol => self.symbol_placement,
        }
    }

    /// Returns the symbol for a currency code.
    #[must_use]
    pub fn symbol(&self, code: &str) -> Option<&str> {
        self.symbols.get(code).map(String::as_str)
    }

    /// Returns the language part of the tag ("fr" for "fr-FR").
    #[must_use]
    pub fn language(&self) -> &str {
        self.tag.split(['-', '_']).next().unwrap_or(&self.tag)
    }

    /// Returns true if `c` is accepted as grouping separator.
    ///
    /// Space-like separators accept any space glyph.
    #[must_use]
    pub const fn is_grouping_separator(&self, c: char) -> bool {
        c == self.grouping_separator
            || (is_space_glyph(self.grouping_separator) && is_space_glyph(c))
    }
}
