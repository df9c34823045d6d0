//! Currency units and the currency catalog.
//!
//! A `CurrencyUnit` is read-only metadata: code, numeric code and the number
//! of fraction digits used by default. The catalog is the lookup seam; the
//! built-in `IsoCurrencyCatalog` carries the ISO 4217 subset this library
//! ships with.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// Code of the reserved "no currency" sentinel.
pub const NO_CURRENCY_CODE: &str = "XXX";

/// A currency designation.
///
/// Two units are equal when their codes are equal.
///
/// Serializes as its code. Deserializing, `FromStr` and `TryFrom<String>`
/// resolve the code against `IsoCurrencyCatalog` only, so a unit built from
/// a custom `CurrencyCatalog` serializes but does not deserialize. Keep the
/// code as a plain string and resolve it with that catalog instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyUnit {
    code: Arc<str>,
    numeric_code: Option<u16>,
    default_fraction_digits: u32,
}

impl CurrencyUnit {
    /// Creates a currency unit.
    #[must_use]
    pub fn new(code: &str, numeric_code: Option<u16>, default_fraction_digits: u32) -> Self {
        Self {
            code: Arc::from(code),
            numeric_code,
            default_fraction_digits,
        }
    }

    /// Returns the currency code (e.g. "EUR").
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the ISO numeric code, if any.
    #[must_use]
    pub const fn numeric_code(&self) -> Option<u16> {
        self.numeric_code
    }

    /// Returns the number of fraction digits used by default.
    #[must_use]
    pub const fn default_fraction_digits(&self) -> u32 {
        self.default_fraction_digits
    }

    /// Returns true for the "no currency" sentinel.
    #[must_use]
    pub fn is_no_currency(&self) -> bool {
        &*self.code == NO_CURRENCY_CODE
    }
}

impl PartialEq for CurrencyUnit {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for CurrencyUnit {}

impl std::hash::Hash for CurrencyUnit {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl std::fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl From<CurrencyUnit> for String {
    fn from(unit: CurrencyUnit) -> Self {
        unit.code.to_string()
    }
}

impl TryFrom<String> for CurrencyUnit {
    type Error = MoneyError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        IsoCurrencyCatalog.lookup(&code)
    }
}

impl std::str::FromStr for CurrencyUnit {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IsoCurrencyCatalog.lookup(s)
    }
}

/// How a currency is designated in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyStyle {
    /// Currency code, e.g. "EUR".
    #[default]
    Code,
    /// Locale-specific symbol, e.g. "€".
    Symbol,
}

/// Lookup of currency metadata by code.
pub trait CurrencyCatalog: Send + Sync {
    /// Resolves a code to a unit.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` when the code is not known.
    fn lookup(&self, code: &str) -> MoneyResult<CurrencyUnit>;

    /// Returns true if the code is known.
    fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_ok()
    }
}

static ISO_CURRENCIES: Lazy<HashMap<&'static str, CurrencyUnit>> = Lazy::new(|| {
    [
        ("USD", 840, 2),
        ("EUR", 978, 2),
        ("CHF", 756, 2),
        ("GBP", 826, 2),
        ("JPY", 392, 0),
        ("CNY", 156, 2),
        ("INR", 356, 2),
        ("DKK", 208, 2),
        ("BGN", 975, 2),
        ("IDR", 360, 2),
        ("SGD", 702, 2),
        ("BHD", 48, 3),
        ("KWD", 414, 3),
        (NO_CURRENCY_CODE, 999, 0),
    ]
    .into_iter()
    .map(|(code, numeric, digits)| (code, CurrencyUnit::new(code, Some(numeric), digits)))
    .collect()
});

/// Catalog backed by the built-in ISO 4217 table.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoCurrencyCatalog;

impl IsoCurrencyCatalog {
    /// Returns all known codes, sorted.
    #[must_use]
    pub fn codes() -> Vec<&'static str> {
        let mut codes: Vec<&'static str> = ISO_CURRENCIES.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

impl CurrencyCatalog for IsoCurrencyCatalog {
    fn lookup(&self, code: &str) -> MoneyResult<CurrencyUnit> {
        ISO_CURRENCIES
            .get(code.to_uppercase().as_str())
            .cloned()
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }
}
