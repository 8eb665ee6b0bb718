//! Brokers module - cash balances and active fund listings per broker.

mod brokers_model;
mod brokers_traits;

pub use brokers_model::*;
pub use brokers_traits::*;
