//! The criteria bag driving rounding resolution.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use moneta_shared::{CurrencyUnit, RoundingDirection};

/// Reserved policy name meaning "use default resolution".
pub const DEFAULT_ROUNDING_NAME: &str = "default";

/// Boolean attribute requesting cash rounding.
pub const CASH_ROUNDING: &str = "cash-rounding";

/// Integer attribute overriding the number of fraction digits.
pub const SCALE: &str = "scale";

/// Direction attribute used together with `SCALE`.
pub const DIRECTION: &str = "direction";

/// Value of a named query attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Rounding direction.
    Direction(RoundingDirection),
    /// Free text.
    Text(String),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<RoundingDirection> for AttributeValue {
    fn from(value: RoundingDirection) -> Self {
        Self::Direction(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Immutable rounding criteria.
///
/// Built with [`RoundingQuery::builder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundingQuery {
    name: Option<String>,
    currency: Option<CurrencyUnit>,
    timestamp: Option<DateTime<Utc>>,
    attributes: BTreeMap<String, AttributeValue>,
}

impl RoundingQuery {
    /// Starts an empty query.
    #[must_use]
    pub fn builder() -> RoundingQueryBuilder {
        RoundingQueryBuilder::default()
    }

    /// Query for the default rounding of a currency.
    #[must_use]
    pub fn for_currency(currency: CurrencyUnit) -> Self {
        Self::builder().currency(currency).build()
    }

    /// Query for an explicitly named policy.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::builder().name(name).build()
    }

    /// Returns a builder seeded with this query's criteria.
    #[must_use]
    pub fn to_builder(&self) -> RoundingQueryBuilder {
        RoundingQueryBuilder {
            query: self.clone(),
        }
    }

    /// Returns the explicit policy name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the currency criterion, if any.
    #[must_use]
    pub const fn currency(&self) -> Option<&CurrencyUnit> {
        self.currency.as_ref()
    }

    /// Returns the instant the rounding rule should be valid for, if any.
    #[must_use]
    pub const fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns true when no explicit name (or the reserved default name) is set.
    #[must_use]
    pub fn is_default_resolution(&self) -> bool {
        self.name.as_deref().is_none_or(|n| n == DEFAULT_ROUNDING_NAME)
    }

    /// Returns a named attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Returns all attributes.
    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    /// Returns a boolean attribute, or `default` when absent or not boolean.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.attributes.get(key) {
            Some(AttributeValue::Bool(v)) => *v,
            _ => default,
        }
    }

    /// Returns an integer attribute.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.attributes.get(key) {
            Some(AttributeValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Returns a direction attribute.
    #[must_use]
    pub fn get_direction(&self, key: &str) -> Option<RoundingDirection> {
        match self.attributes.get(key) {
            Some(AttributeValue::Direction(d)) => Some(*d),
            Some(AttributeValue::Text(t)) => t.parse().ok(),
            _ => None,
        }
    }

    /// Returns the `scale` attribute when it is a valid fraction digit count.
    #[must_use]
    pub fn scale(&self) -> Option<u32> {
        self.get_int(SCALE).and_then(|s| u32::try_from(s).ok())
    }

    /// Returns the `direction` attribute.
    #[must_use]
    pub fn direction(&self) -> Option<RoundingDirection> {
        self.get_direction(DIRECTION)
    }

    /// Returns true if cash rounding was requested.
    #[must_use]
    pub fn is_cash_rounding(&self) -> bool {
        self.get_bool(CASH_ROUNDING, false)
    }
}

/// Builder for [`RoundingQuery`].
#[derive(Debug, Clone, Default)]
pub struct RoundingQueryBuilder {
    query: RoundingQuery,
}

impl RoundingQueryBuilder {
    /// Sets the explicit policy name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.query.name = Some(name.into());
        self
    }

    /// Sets the currency criterion.
    #[must_use]
    pub fn currency(mut self, currency: CurrencyUnit) -> Self {
        self.query.currency = Some(currency);
        self
    }

    /// Sets the instant the rounding should be valid for.
    #[must_use]
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.query.timestamp = Some(timestamp);
        self
    }

    /// Sets a named attribute.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.query.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets the `scale` attribute.
    #[must_use]
    pub fn scale(self, scale: u32) -> Self {
        self.set(SCALE, scale)
    }

    /// Sets the `direction` attribute.
    #[must_use]
    pub fn direction(self, direction: RoundingDirection) -> Self {
        self.set(DIRECTION, direction)
    }

    /// Sets the `cash-rounding` flag.
    #[must_use]
    pub fn cash_rounding(self, enabled: bool) -> Self {
        self.set(CASH_ROUNDING, enabled)
    }

    /// Finishes the query.
    #[must_use]
    pub fn build(self) -> RoundingQuery {
        self.query
    }
}
