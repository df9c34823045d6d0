//! Library configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{CurrencyStyle, RoundingDirection};

/// Moneta configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonetaConfig {
    /// Rounding configuration.
    #[serde(default)]
    pub rounding: RoundingConfig,
    /// Formatting configuration.
    #[serde(default)]
    pub format: FormatConfig,
}

/// Rounding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RoundingConfig {
    /// Direction used when falling back to a currency's default fraction digits.
    #[serde(default)]
    pub default_direction: RoundingDirection,
    /// Cash rounding rules, one per currency.
    #[serde(default = "default_cash_rules")]
    pub cash: Vec<CashRuleConfig>,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            default_direction: RoundingDirection::default(),
            cash: default_cash_rules(),
        }
    }
}

/// A cash rounding rule for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CashRuleConfig {
    /// Currency code the rule applies to.
    pub currency: String,
    /// Smallest circulating denomination.
    #[serde(default = "default_cash_increment")]
    pub increment: Decimal,
    /// Remainder from which amounts round up to the next increment.
    #[serde(default = "default_cash_threshold")]
    pub threshold: Decimal,
    /// Fraction digits of the first rounding pass.
    #[serde(default = "default_cash_scale")]
    pub scale: u32,
}

fn default_cash_rules() -> Vec<CashRuleConfig> {
    vec![CashRuleConfig {
        currency: "CHF".to_string(),
        increment: default_cash_increment(),
        threshold: default_cash_threshold(),
        scale: default_cash_scale(),
    }]
}

fn default_cash_increment() -> Decimal {
    Decimal::new(5, 2) // 0.05
}

fn default_cash_threshold() -> Decimal {
    Decimal::new(3, 2) // 0.03
}

fn default_cash_scale() -> u32 {
    2
}

/// Formatting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatConfig {
    /// Locale tag used when none is requested.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Currency style used when none is requested.
    #[serde(default)]
    pub default_style: CurrencyStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            default_style: CurrencyStyle::default(),
        }
    }
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl MonetaConfig {
    /// Loads configuration from `.env`, config files and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        // a missing .env file is fine
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONETA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = MonetaConfig::default();
        assert_eq!(config.rounding.default_direction, RoundingDirection::HalfEven);
        assert_eq!(
            config.rounding.cash,
            vec![CashRuleConfig {
                currency: "CHF".into(),
                increment: dec!(0.05),
                threshold: dec!(0.03),
                scale: 2,
            }]
        );
        assert_eq!(config.format.default_locale, "en-US");
        assert_eq!(config.format.default_style, CurrencyStyle::Code);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(["MONETA__FORMAT__DEFAULT_LOCALE", "RUN_MODE"], || {
            let config = MonetaConfig::load().unwrap();
            assert_eq!(config.format.default_locale, "en-US");
            assert_eq!(config.rounding.cash.len(), 1);
        });
    }

    #[test]
    fn test_load_env_override() {
        temp_env::with_vars(
            [
                ("MONETA__FORMAT__DEFAULT_LOCALE", Some("fr-FR")),
                ("MONETA__ROUNDING__DEFAULT_DIRECTION", Some("HALF_UP")),
            ],
            || {
                let config = MonetaConfig::load().unwrap();
                assert_eq!(config.format.default_locale, "fr-FR");
                assert_eq!(config.rounding.default_direction, RoundingDirection::HalfUp);
            },
        );
    }
}
