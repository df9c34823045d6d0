//! Locale-aware amount formatting and parsing.
//!
//! - `profile` - declarative locale grammar
//! - `locales` - built-in profiles
//! - `registry` - profile lookup by tag
//! - `amount_format` - the engine interpreting a profile

pub mod amount_format;
pub mod error;
pub mod locales;
pub mod profile;
pub mod registry;

#[cfg(test)]
mod format_props;

pub use amount_format::AmountFormat;
pub use error::{FormatError, FormatResult, STRUCTURAL_ERROR_INDEX};
pub use profile::{
    CurrencyPlacement, CurrencyPosition, Grouping, LocaleProfile, NBSP, NNBSP, NegativePattern,
    is_space_glyph,
};
pub use registry::FormatRegistry;
