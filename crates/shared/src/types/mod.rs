//! Value types shared by every Moneta crate.

pub mod currency;
pub mod money;
pub mod operator;
pub mod rounding;

#[cfg(test)]
mod money_props;

pub use currency::{
    CurrencyCatalog, CurrencyStyle, CurrencyUnit, IsoCurrencyCatalog, NO_CURRENCY_CODE,
};
pub use money::Money;
pub use operator::MonetaryOperator;
pub use rounding::RoundingDirection;
