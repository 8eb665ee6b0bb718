use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Trade direction of a stock transaction.
///
/// `Split` records a 1-to-N share split; for splits the transaction's
/// `shares` field carries the ratio N rather than a share count.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TxSide {
    Buy,
    Sell,
    Split,
}

impl TxSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxSide::Buy => "BUY",
            TxSide::Sell => "SELL",
            TxSide::Split => "SPLIT",
        }
    }
}

/// One broker record for a traded instrument.
///
/// `shares` is a magnitude; `side` carries the direction. Lot matching
/// requires the records of one instrument in ascending date order, with
/// ties kept in insertion order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockTransaction {
    pub broker: String,
    pub side: TxSide,
    pub shares: f64,
    pub price: f64,
    pub fee: f64,
    pub date: DateTime<Utc>,
}

/// A listed instrument (stock or ETF).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockInstrument {
    pub symbol: String,
    pub currency: String,
}

/// An instrument together with its full transaction history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockWithTransactions {
    pub instrument: StockInstrument,
    pub transactions: Vec<StockTransaction>,
}

/// Every instrument the backend knows transactions for.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StockPortfolio {
    pub positions: Vec<StockWithTransactions>,
}

impl StockPortfolio {
    /// Symbols of all instruments in the portfolio. Also the "known stock"
    /// set the quote index uses to tell instruments from currency pairs.
    pub fn known_symbols(&self) -> HashSet<String> {
        self.positions
            .iter()
            .map(|p| p.instrument.symbol.clone())
            .collect()
    }
}
