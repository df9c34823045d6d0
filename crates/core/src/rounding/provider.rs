//! Rounding providers.
//!
//! A provider is one policy namespace: it declares the policy names it
//! serves and answers queries with a policy or nothing.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::warn;

use moneta_shared::RoundingDirection;
use moneta_shared::config::CashRuleConfig;

use super::context::RoundingContext;
use super::policy::{CashRounding, FixedRounding, RoundingPolicy, ScaleRounding};
use super::query::RoundingQuery;

/// A source of rounding policies.
pub trait RoundingProvider: Send + Sync {
    /// Name of this provider, used in every `RoundingContext` it issues.
    fn provider_name(&self) -> &str;

    /// Policy names this provider serves explicitly.
    fn rounding_names(&self) -> &BTreeSet<String>;

    /// Resolves a query, returning `None` when this provider has no match.
    fn resolve(&self, query: &RoundingQuery) -> Option<RoundingPolicy>;
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Policy name forcing the result to zero.
pub const ZERO_ROUNDING: &str = "zero";

/// Policy name forcing the result to minus one unit.
pub const MINUS_ONE_ROUNDING: &str = "minus-one";

/// Degenerate policies for the "no currency" sentinel.
///
/// Default queries for `XXX` resolve by time: a timestamp strictly after the
/// clock's current instant selects `minus-one`, anything else selects
/// `zero`. The clock is read on every call.
pub struct SentinelRoundingProvider {
    names: BTreeSet<String>,
    clock: Arc<dyn Clock>,
    zero: RoundingPolicy,
    minus_one: RoundingPolicy,
}

impl SentinelRoundingProvider {
    /// Provider name.
    pub const NAME: &'static str = "SentinelRoundingProvider";

    /// Creates the provider on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates the provider on a custom clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            names: [ZERO_ROUNDING, MINUS_ONE_ROUNDING]
                .into_iter()
                .map(String::from)
                .collect(),
            clock,
            zero: RoundingPolicy::new(
                RoundingContext::new(Self::NAME, ZERO_ROUNDING),
                FixedRounding::new(Decimal::ZERO),
            ),
            minus_one: RoundingPolicy::new(
                RoundingContext::new(Self::NAME, MINUS_ONE_ROUNDING),
                FixedRounding::new(Decimal::NEGATIVE_ONE),
            ),
        }
    }
}

impl Default for SentinelRoundingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundingProvider for SentinelRoundingProvider {
    fn provider_name(&self) -> &str {
        Self::NAME
    }

    fn rounding_names(&self) -> &BTreeSet<String> {
        &self.names
    }

    fn resolve(&self, query: &RoundingQuery) -> Option<RoundingPolicy> {
        if query.is_default_resolution() {
            let currency = query.currency()?;
            if !currency.is_no_currency() {
                return None;
            }
            let in_future = query.timestamp().is_some_and(|ts| ts > self.clock.now());
            return Some(if in_future {
                self.minus_one.clone()
            } else {
                self.zero.clone()
            });
        }

        match query.name() {
            Some(ZERO_ROUNDING) => Some(self.zero.clone()),
            Some(MINUS_ONE_ROUNDING) => Some(self.minus_one.clone()),
            _ => None,
        }
    }
}

/// Cash roundings keyed by currency code.
///
/// Serves the names `<CODE>-cash` and default queries carrying the
/// `cash-rounding` flag for a configured currency.
pub struct CashRoundingProvider {
    names: BTreeSet<String>,
    policies: HashMap<String, RoundingPolicy>,
}

impl CashRoundingProvider {
    /// Provider name.
    pub const NAME: &'static str = "CashRoundingProvider";

    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: BTreeSet::new(),
            policies: HashMap::new(),
        }
    }

    /// Creates a provider from configured rules.
    ///
    /// Rules with a non-positive increment are skipped.
    #[must_use]
    pub fn from_rules(rules: &[CashRuleConfig]) -> Self {
        rules.iter().fold(Self::new(), |provider, rule| {
            if rule.increment <= Decimal::ZERO {
                warn!(currency = %rule.currency, "Skipping cash rule with non-positive increment");
                return provider;
            }
            provider.with_rule(
                &rule.currency,
                CashRounding::new(rule.increment, rule.threshold, rule.scale),
            )
        })
    }

    /// Adds the cash rounding for one currency.
    #[must_use]
    pub fn with_rule(mut self, currency: &str, rounding: CashRounding) -> Self {
        let code = currency.to_uppercase();
        let name = cash_rounding_name(&code);
        self.policies.insert(
            code,
            RoundingPolicy::new(RoundingContext::new(Self::NAME, name.clone()), rounding),
        );
        self.names.insert(name);
        self
    }
}

impl Default for CashRoundingProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Policy name of a currency's cash rounding, e.g. "CHF-cash".
#[must_use]
pub fn cash_rounding_name(code: &str) -> String {
    format!("{code}-cash")
}

impl RoundingProvider for CashRoundingProvider {
    fn provider_name(&self) -> &str {
        Self::NAME
    }

    fn rounding_names(&self) -> &BTreeSet<String> {
        &self.names
    }

    fn resolve(&self, query: &RoundingQuery) -> Option<RoundingPolicy> {
        if query.is_default_resolution() {
            let currency = query.currency()?;
            if !query.is_cash_rounding() {
                return None;
            }
            return self.policies.get(currency.code()).cloned();
        }

        let code = query.name()?.strip_suffix("-cash")?;
        self.policies.get(code).cloned()
    }
}

/// Fixed-scale roundings for queries carrying a `scale` attribute.
pub struct ScaleRoundingProvider {
    names: BTreeSet<String>,
    default_direction: RoundingDirection,
}

impl ScaleRoundingProvider {
    /// Provider name.
    pub const NAME: &'static str = "ScaleRoundingProvider";

    /// Creates the provider; `default_direction` applies when the query has none.
    #[must_use]
    pub const fn new(default_direction: RoundingDirection) -> Self {
        Self {
            names: BTreeSet::new(),
            default_direction,
        }
    }
}

impl Default for ScaleRoundingProvider {
    fn default() -> Self {
        Self::new(RoundingDirection::default())
    }
}

impl RoundingProvider for ScaleRoundingProvider {
    fn provider_name(&self) -> &str {
        Self::NAME
    }

    fn rounding_names(&self) -> &BTreeSet<String> {
        &self.names
    }

    fn resolve(&self, query: &RoundingQuery) -> Option<RoundingPolicy> {
        if !query.is_default_resolution() {
            return None;
        }
        let scale = query.scale()?;
        let direction = query.direction().unwrap_or(self.default_direction);
        Some(RoundingPolicy::new(
            RoundingContext::new(Self::NAME, format!("scale-{scale}-{direction}")),
            ScaleRounding::new(scale, direction),
        ))
    }
}
