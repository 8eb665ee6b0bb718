//! Snapshot module - the load coordinator and the immutable asset snapshot
//! it produces.

mod snapshot_model;
mod snapshot_service;
mod snapshot_traits;

pub use snapshot_model::*;
pub use snapshot_service::*;
pub use snapshot_traits::*;
