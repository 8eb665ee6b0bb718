//! Quote source trait.

use async_trait::async_trait;

use super::quotes_model::Quote;
use crate::errors::Result;

/// Capability interface over the quote-fetching collaborator.
///
/// The source only reports the latest quote per symbol; historical series
/// are out of scope for the engine.
#[async_trait]
pub trait QuoteSourceTrait: Send + Sync {
    /// Latest quote for one symbol, if the source has one.
    async fn latest_quote(&self, symbol: &str) -> Result<Option<Quote>>;

    /// Latest quotes for the given symbols, batched. `None` loads every
    /// symbol the source quotes.
    async fn latest_quotes(&self, symbols: Option<&[String]>) -> Result<Vec<Quote>>;
}
