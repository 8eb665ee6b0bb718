//! Fund source trait.

use async_trait::async_trait;

use super::funds_model::Fund;
use crate::errors::Result;

/// Capability interface over the backend holding fund valuations.
#[async_trait]
pub trait FundSourceTrait: Send + Sync {
    /// Loads the fund records for the given fund ids, sorted by
    /// (broker, name). Unknown ids are skipped, not an error.
    async fn list_funds(&self, fund_ids: &[String]) -> Result<Vec<Fund>>;
}
