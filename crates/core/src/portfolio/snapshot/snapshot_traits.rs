//! Snapshot service trait.

use async_trait::async_trait;
use std::sync::Arc;

use super::snapshot_model::AssetSnapshot;
use crate::errors::Result;

/// Contract of the load coordinator consumers (CLI, UI) talk to.
#[async_trait]
pub trait SnapshotServiceTrait: Send + Sync {
    /// Loads quotes, brokers, funds and stocks, honoring the declared
    /// dependencies between them, and returns one immutable snapshot when
    /// every source has completed.
    async fn load_assets(&self) -> Result<Arc<AssetSnapshot>>;
}
