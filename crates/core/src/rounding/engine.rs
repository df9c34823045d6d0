//! Rounding resolution.
//!
//! The engine holds the registration table of providers and resolves a
//! `RoundingQuery` against it:
//!
//! 1. An explicit, non-default name goes to the first provider (in
//!    registration order) that declares it. If none declares it the result is
//!    absent; there is no fallback to default resolution.
//! 2. Otherwise every provider is asked in registration order and the first
//!    policy returned wins.
//! 3. Absent is a normal outcome. Callers wanting the currency's default
//!    fraction digits use [`RoundingEngine::resolve_or_default`].
//!
//! Registration is copy-on-write: a resolution observes either the old or
//! the new provider list, never a partial one.

use std::collections::BTreeSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, trace};

use moneta_shared::{CurrencyUnit, MonetaConfig, RoundingDirection};

use super::context::RoundingContext;
use super::policy::{RoundingPolicy, ScaleRounding};
use super::provider::{
    CashRoundingProvider, Clock, RoundingProvider, ScaleRoundingProvider,
    SentinelRoundingProvider, SystemClock,
};
use super::query::RoundingQuery;

type ProviderList = Arc<Vec<Arc<dyn RoundingProvider>>>;

static GLOBAL: Lazy<RoundingEngine> =
    Lazy::new(|| RoundingEngine::from_config(&MonetaConfig::default()));

/// Resolves rounding queries against registered providers.
pub struct RoundingEngine {
    providers: RwLock<ProviderList>,
    default_direction: RoundingDirection,
}

impl RoundingEngine {
    /// Name used in the context of currency default roundings.
    pub const DEFAULT_PROVIDER_NAME: &'static str = "RoundingEngine";

    /// Creates an engine without providers.
    #[must_use]
    pub fn new(default_direction: RoundingDirection) -> Self {
        Self {
            providers: RwLock::new(Arc::new(Vec::new())),
            default_direction,
        }
    }

    /// Creates an engine with the bundled providers, configured from `config`.
    ///
    /// Registration order: sentinel, cash, scale.
    #[must_use]
    pub fn from_config(config: &MonetaConfig) -> Self {
        Self::from_config_with_clock(config, Arc::new(SystemClock))
    }

    /// Like [`RoundingEngine::from_config`] with a custom clock for the
    /// temporal sentinel resolution.
    #[must_use]
    pub fn from_config_with_clock(config: &MonetaConfig, clock: Arc<dyn Clock>) -> Self {
        let direction = config.rounding.default_direction;
        let engine = Self::new(direction);
        engine.register(Arc::new(SentinelRoundingProvider::with_clock(clock)));
        engine.register(Arc::new(CashRoundingProvider::from_rules(
            &config.rounding.cash,
        )));
        engine.register(Arc::new(ScaleRoundingProvider::new(direction)));
        engine
    }

    /// Returns the process-wide engine built from the default configuration.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Appends a provider to the registration table.
    pub fn register(&self, provider: Arc<dyn RoundingProvider>) {
        let mut providers = self.providers.write();
        let mut next = Vec::with_capacity(providers.len() + 1);
        next.extend(providers.iter().cloned());
        debug!(
            provider = provider.provider_name(),
            names = ?provider.rounding_names(),
            position = next.len(),
            "Registering rounding provider"
        );
        next.push(provider);
        *providers = Arc::new(next);
    }

    fn snapshot(&self) -> ProviderList {
        Arc::clone(&self.providers.read())
    }

    /// Returns provider names in registration order.
    #[must_use]
    pub fn provider_names(&self) -> Vec<String> {
        self.snapshot()
            .iter()
            .map(|p| p.provider_name().to_string())
            .collect()
    }

    /// Returns every explicitly served policy name.
    #[must_use]
    pub fn rounding_names(&self) -> BTreeSet<String> {
        self.snapshot()
            .iter()
            .flat_map(|p| p.rounding_names().iter().cloned())
            .collect()
    }

    /// Resolves a query to a policy; `None` when nothing matches.
    #[must_use]
    pub fn resolve(&self, query: &RoundingQuery) -> Option<RoundingPolicy> {
        let providers = self.snapshot();

        if !query.is_default_resolution() {
            let name = query.name()?;
            let Some(provider) = providers
                .iter()
                .find(|p| p.rounding_names().contains(name))
            else {
                debug!(name, "No provider serves rounding name");
                return None;
            };
            let policy = provider.resolve(query);
            trace!(
                name,
                provider = provider.provider_name(),
                found = policy.is_some(),
                "Resolved named rounding"
            );
            return policy;
        }

        let resolved = providers.iter().find_map(|p| p.resolve(query));
        match &resolved {
            Some(policy) => trace!(context = %policy.context(), "Resolved default rounding"),
            None => debug!(
                currency = query.currency().map(CurrencyUnit::code),
                "No rounding matched query"
            ),
        }
        resolved
    }

    /// Resolves a query, falling back to the default rounding of the query's
    /// currency. `None` only when nothing matches and no currency is given.
    #[must_use]
    pub fn resolve_or_default(&self, query: &RoundingQuery) -> Option<RoundingPolicy> {
        self.resolve(query)
            .or_else(|| query.currency().map(|c| self.default_rounding(c)))
    }

    /// Rounding to the currency's default fraction digits.
    #[must_use]
    pub fn default_rounding(&self, currency: &CurrencyUnit) -> RoundingPolicy {
        RoundingPolicy::new(
            RoundingContext::new(Self::DEFAULT_PROVIDER_NAME, currency.code()),
            ScaleRounding::new(currency.default_fraction_digits(), self.default_direction),
        )
    }
}

impl Default for RoundingEngine {
    fn default() -> Self {
        Self::from_config(&MonetaConfig::default())
    }
}
