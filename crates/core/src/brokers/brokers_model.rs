use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single currency balance held at a broker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashBalance {
    pub currency: String,
    pub balance: f64,
}

/// A brokerage account: its cash balances, the funds currently active in it,
/// and the valuation date of its latest fund report (when known).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Broker {
    pub name: String,
    pub cash_balances: Vec<CashBalance>,
    /// Ids of the funds this broker currently offers positions in. Drives
    /// which fund records are loaded for it.
    pub active_fund_ids: Vec<String>,
    pub funds_update_date: Option<NaiveDate>,
}
