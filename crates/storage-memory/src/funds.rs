use async_trait::async_trait;

use assetfolio_core::funds::{Fund, FundSourceTrait};
use assetfolio_core::Result;

/// Fund source backed by an owned fund list.
pub struct MemoryFundSource {
    funds: Vec<Fund>,
}

impl MemoryFundSource {
    pub fn new(funds: Vec<Fund>) -> Self {
        Self { funds }
    }
}

#[async_trait]
impl FundSourceTrait for MemoryFundSource {
    async fn list_funds(&self, fund_ids: &[String]) -> Result<Vec<Fund>> {
        let mut funds: Vec<Fund> = self
            .funds
            .iter()
            .filter(|fund| fund_ids.contains(&fund.id))
            .cloned()
            .collect();
        funds.sort_by(|a, b| (&a.broker, &a.name).cmp(&(&b.broker, &b.name)));
        Ok(funds)
    }
}
