//! Rounding policies and their resolution.
//!
//! - `query` - the criteria bag
//! - `policy` - rounding operators and their identity
//! - `provider` - pluggable policy namespaces
//! - `engine` - precedence-ordered resolution over registered providers

pub mod context;
pub mod engine;
pub mod policy;
pub mod provider;
pub mod query;

#[cfg(test)]
mod rounding_props;

pub use context::RoundingContext;
pub use engine::RoundingEngine;
pub use policy::{CashRounding, FixedRounding, RoundingPolicy, ScaleRounding};
pub use provider::{
    CashRoundingProvider, Clock, MINUS_ONE_ROUNDING, ManualClock, RoundingProvider,
    ScaleRoundingProvider, SentinelRoundingProvider, SystemClock, ZERO_ROUNDING,
    cash_rounding_name,
};
pub use query::{
    AttributeValue, CASH_ROUNDING, DEFAULT_ROUNDING_NAME, DIRECTION, RoundingQuery,
    RoundingQueryBuilder, SCALE,
};
