use async_trait::async_trait;

use assetfolio_core::quotes::{Quote, QuoteSourceTrait};
use assetfolio_core::Result;

/// Quote source backed by an owned list of latest quotes, one per symbol.
pub struct MemoryQuoteSource {
    quotes: Vec<Quote>,
}

impl MemoryQuoteSource {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }
}

#[async_trait]
impl QuoteSourceTrait for MemoryQuoteSource {
    async fn latest_quote(&self, symbol: &str) -> Result<Option<Quote>> {
        Ok(self
            .quotes
            .iter()
            .find(|quote| quote.symbol == symbol)
            .cloned())
    }

    async fn latest_quotes(&self, symbols: Option<&[String]>) -> Result<Vec<Quote>> {
        Ok(self
            .quotes
            .iter()
            .filter(|quote| symbols.map_or(true, |list| list.contains(&quote.symbol)))
            .cloned()
            .collect())
    }
}
