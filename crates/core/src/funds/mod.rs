//! Funds module - mutual-fund positions and their aggregates.

mod funds_model;
mod funds_traits;

pub use funds_model::*;
pub use funds_traits::*;
