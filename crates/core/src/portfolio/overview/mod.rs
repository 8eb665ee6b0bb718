//! Overview module - the grouping engine producing 3-level summary trees
//! and flat sum groups over asset items.

mod overview_model;
mod overview_service;

pub use overview_model::*;
pub use overview_service::*;
