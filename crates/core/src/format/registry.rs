//! Locale profile registry.
//!
//! Profiles are looked up by tag. Tags compare case-insensitively with `_`
//! and `-` treated alike; an unknown region falls back to a profile for the
//! bare language.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use moneta_shared::{CurrencyStyle, MonetaConfig};

use super::amount_format::AmountFormat;
use super::locales::builtin_profiles;
use super::profile::LocaleProfile;

fn normalize(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

/// Registered locale profiles.
pub struct FormatRegistry {
    profiles: RwLock<Vec<Arc<LocaleProfile>>>,
    default_locale: String,
    default_style: CurrencyStyle,
}

impl FormatRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(default_locale: impl Into<String>, default_style: CurrencyStyle) -> Self {
        Self {
            profiles: RwLock::new(Vec::new()),
            default_locale: default_locale.into(),
            default_style,
        }
    }

    /// Creates a registry holding the built-in profiles, defaulting to `en-US`.
    #[must_use]
    pub fn with_builtin_profiles() -> Self {
        Self::from_config(&MonetaConfig::default())
    }

    /// Creates a registry holding the built-in profiles with defaults taken
    /// from `config`.
    #[must_use]
    pub fn from_config(config: &MonetaConfig) -> Self {
        let registry = Self::new(
            config.format.default_locale.clone(),
            config.format.default_style,
        );
        for profile in builtin_profiles() {
            registry.register(profile);
        }
        registry
    }

    /// Adds a profile. Returns false if the tag is already taken.
    pub fn register(&self, profile: LocaleProfile) -> bool {
        let key = normalize(&profile.tag);
        let mut profiles = self.profiles.write();
        if profiles.iter().any(|p| normalize(&p.tag) == key) {
            debug!(tag = %profile.tag, "Locale profile already registered");
            return false;
        }
        debug!(tag = %profile.tag, "Registering locale profile");
        profiles.push(Arc::new(profile));
        true
    }

    /// Looks up a profile by tag, falling back to the tag's language.
    #[must_use]
    pub fn profile(&self, tag: &str) -> Option<Arc<LocaleProfile>> {
        let key = normalize(tag);
        let profiles = self.profiles.read();
        if let Some(found) = profiles.iter().find(|p| normalize(&p.tag) == key) {
            return Some(Arc::clone(found));
        }
        let language = key.split('-').next().unwrap_or(&key);
        profiles
            .iter()
            .find(|p| normalize(&p.tag) == language)
            .or_else(|| {
                profiles
                    .iter()
                    .find(|p| p.language().eq_ignore_ascii_case(language))
            })
            .cloned()
    }

    /// Returns registered tags in registration order.
    #[must_use]
    pub fn available_locales(&self) -> Vec<String> {
        self.profiles.read().iter().map(|p| p.tag.clone()).collect()
    }

    /// Returns a format for `tag` in the given style.
    #[must_use]
    pub fn amount_format(&self, tag: &str, style: CurrencyStyle) -> Option<AmountFormat> {
        self.profile(tag)
            .map(|profile| AmountFormat::new(profile, style))
    }

    /// Returns the format for the configured default locale and style.
    #[must_use]
    pub fn default_format(&self) -> Option<AmountFormat> {
        self.amount_format(&self.default_locale, self.default_style)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_builtin_profiles()
    }
}
