use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A mutual-fund position as reported by the broker's latest valuation.
///
/// `capital` is the paid-in amount, `market_value` the current valuation;
/// profit and ROI are derived, not stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub broker: String,
    pub name: String,
    pub id: String,
    pub amount: i32,
    pub capital: f64,
    pub market_value: f64,
    pub price: f64,
    pub date: NaiveDate,
}

impl Fund {
    /// Unrealized profit against paid-in capital.
    pub fn profit(&self) -> f64 {
        self.market_value - self.capital
    }

    /// Return on investment. NaN when no capital was recorded, so a bad
    /// record reads as "unknown" instead of ±infinity.
    pub fn roi(&self) -> f64 {
        if self.capital == 0.0 {
            f64::NAN
        } else {
            self.profit() / self.capital
        }
    }
}

/// Aggregate figures over a set of fund positions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundSummary {
    pub market_value: f64,
    pub capital: f64,
    pub profit: f64,
    pub roi: f64,
}

impl FundSummary {
    /// Sums market value, capital and profit over `funds`.
    pub fn calculate<'a>(funds: impl IntoIterator<Item = &'a Fund>) -> Self {
        let mut market_value = 0.0;
        let mut capital = 0.0;
        for fund in funds {
            market_value += fund.market_value;
            capital += fund.capital;
        }
        let profit = market_value - capital;
        let roi = if capital == 0.0 {
            f64::NAN
        } else {
            profit / capital
        };
        FundSummary {
            market_value,
            capital,
            profit,
            roi,
        }
    }
}
