//! Portfolio module - asset-item normalization, overview grouping, and the
//! load coordinator behind immutable snapshots.

pub mod items;
pub mod overview;
pub mod snapshot;

pub use items::*;
pub use overview::*;
pub use snapshot::*;
