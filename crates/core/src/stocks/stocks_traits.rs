//! Stock transaction source trait.

use async_trait::async_trait;

use super::stocks_model::StockPortfolio;
use crate::errors::Result;

/// Capability interface over the backend holding stock transactions.
#[async_trait]
pub trait StockSourceTrait: Send + Sync {
    /// Loads instruments with their transaction histories.
    ///
    /// `broker` restricts the transactions to one broker, `symbol` restricts
    /// the result to one instrument; `None` means no filter. Transactions
    /// come back in ascending date order per instrument.
    async fn list_stock_transactions(
        &self,
        broker: Option<&str>,
        symbol: Option<&str>,
    ) -> Result<StockPortfolio>;
}
