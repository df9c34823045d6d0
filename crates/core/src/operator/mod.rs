//! Monetary operators.
//!
//! The `MonetaryOperator` trait lives in `moneta_shared`; this module adds
//! the extractors built on it.

pub mod extract;

pub use extract::{MajorPart, MinorPart, major_part, minor_part};
pub use moneta_shared::types::MonetaryOperator;
