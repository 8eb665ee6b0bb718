use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest known market quote for a symbol.
///
/// The symbol is either an instrument ticker (e.g. "VTI") or a Yahoo-style
/// currency pair (e.g. "USDJPY=X"); for pairs, `price` is the exchange rate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}
