use serde::{Deserialize, Serialize};

/// Top-level asset classes an `AssetItem` can belong to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AssetType {
    Cash,
    Funds,
    Stocks,
}

impl AssetType {
    /// Display label, also the grouping key value of the asset dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Cash => "Cash",
            AssetType::Funds => "Funds",
            AssetType::Stocks => "Stock&ETF",
        }
    }
}

/// Normalized valuation record: one row per (asset type, broker, currency).
///
/// `value` and `profit` are denominated in `currency`. `profit` is NaN when
/// the underlying instrument has no quote; the row still exists so the
/// position is visible, just unvalued.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetItem {
    pub asset_type: AssetType,
    pub broker: String,
    pub currency: String,
    pub value: f64,
    pub profit: f64,
}
