//! Shared types, errors, and configuration for Moneta.
//!
//! This crate provides the value types used across all other crates:
//! - Money with exact decimal precision
//! - Currency units and the currency catalog
//! - Rounding directions and the monetary operator trait
//! - The money error taxonomy
//! - Configuration management and tracing setup

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::MonetaConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{
    CurrencyCatalog, CurrencyStyle, CurrencyUnit, IsoCurrencyCatalog, MonetaryOperator, Money,
    RoundingDirection,
};
