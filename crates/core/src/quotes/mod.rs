//! Quotes module - latest-quote models, the symbol index, and FX conversion.

mod quote_index;
mod quotes_model;
mod quotes_traits;

pub use quote_index::*;
pub use quotes_model::*;
pub use quotes_traits::*;
