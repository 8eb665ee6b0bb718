//! Stocks module - transaction records, the FIFO lot matcher, and the
//! portfolio container.

pub mod lot_matcher;
mod stocks_model;
mod stocks_traits;

pub use lot_matcher::*;
pub use stocks_model::*;
pub use stocks_traits::*;
