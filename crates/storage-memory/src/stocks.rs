use async_trait::async_trait;

use assetfolio_core::stocks::{StockPortfolio, StockSourceTrait, StockWithTransactions};
use assetfolio_core::Result;

/// Stock transaction source backed by an owned portfolio.
pub struct MemoryStockSource {
    positions: Vec<StockWithTransactions>,
}

impl MemoryStockSource {
    pub fn new(positions: Vec<StockWithTransactions>) -> Self {
        Self { positions }
    }
}

#[async_trait]
impl StockSourceTrait for MemoryStockSource {
    async fn list_stock_transactions(
        &self,
        broker: Option<&str>,
        symbol: Option<&str>,
    ) -> Result<StockPortfolio> {
        let positions = self
            .positions
            .iter()
            .filter(|position| symbol.map_or(true, |s| position.instrument.symbol == s))
            .map(|position| {
                let mut position = position.clone();
                if let Some(broker) = broker {
                    position.transactions.retain(|tx| tx.broker == broker);
                }
                position.transactions.sort_by_key(|tx| tx.date);
                position
            })
            .collect();
        Ok(StockPortfolio { positions })
    }
}
