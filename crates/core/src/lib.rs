//! Core monetary logic for Moneta.
//!
//! This crate contains the behaviour built on the shared value types:
//! operators over amounts, rounding resolution and locale formatting.
//!
//! # Modules
//!
//! - `operator` - Monetary operators such as minor-part extraction
//! - `rounding` - Rounding policies and provider-based resolution
//! - `format` - Locale-aware amount formatting and parsing

pub mod format;
pub mod operator;
pub mod rounding;

pub use format::{AmountFormat, FormatError, FormatRegistry, FormatResult, LocaleProfile};
pub use rounding::{RoundingEngine, RoundingPolicy, RoundingProvider, RoundingQuery};
