//! Identity of a resolved rounding policy.

use serde::{Deserialize, Serialize};

/// Provider name plus policy name.
///
/// Used for diagnostics and equality only, never for resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundingContext {
    provider: String,
    name: String,
}

impl RoundingContext {
    /// Creates a rounding context.
    #[must_use]
    pub fn new(provider: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            name: name.into(),
        }
    }

    /// Returns the name of the provider that produced the policy.
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns the policy name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for RoundingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.provider, self.name)
    }
}
