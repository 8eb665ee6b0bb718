//! FIFO lot matching over an ordered stock-transaction stream.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::stocks_model::{StockTransaction, TxSide};

/// Net result of matching all transactions of one instrument at one broker.
///
/// `liquidated` is the signed net cash realized so far: buys subtract their
/// cost, sells add their proceeds, so a negative value is capital still
/// deployed in the market.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockBalance {
    pub shares: f64,
    pub fee: f64,
    pub liquidated: f64,
    pub vwap: f64,
}

impl StockBalance {
    /// Sentinel returned when a sell consumes more shares than are open.
    pub fn unresolved() -> Self {
        StockBalance {
            shares: f64::NAN,
            fee: f64::NAN,
            liquidated: f64::NAN,
            vwap: f64::NAN,
        }
    }

    /// True when the transaction stream over-sold and no balance could be
    /// derived. Callers must check this before using any field.
    pub fn is_unresolved(&self) -> bool {
        self.shares.is_nan()
    }
}

/// One still-open buy tranche.
struct OpenLot {
    price: f64,
    shares: f64,
}

/// Matches an ordered transaction stream against a FIFO queue of open lots.
///
/// Callers must supply transactions in ascending date order. A sell always
/// closes the oldest open lots first, splitting a lot when it is larger than
/// the remaining sell size. A split multiplies the share balance by the
/// ratio (floored to whole shares) and rescales every open lot so its total
/// cost is preserved. Selling more shares than are open yields
/// [`StockBalance::unresolved`].
pub fn calc_balance<'a, I>(transactions: I) -> StockBalance
where
    I: IntoIterator<Item = &'a StockTransaction>,
{
    let mut open: VecDeque<OpenLot> = VecDeque::new();
    let mut shares = 0.0;
    let mut fee = 0.0;
    let mut liquidated = 0.0;

    for tx in transactions {
        fee += tx.fee;
        match tx.side {
            TxSide::Buy => {
                shares += tx.shares;
                liquidated -= tx.price * tx.shares;
                open.push_back(OpenLot {
                    price: tx.price,
                    shares: tx.shares,
                });
            }
            TxSide::Sell => {
                shares -= tx.shares;
                liquidated += tx.price * tx.shares;
                let mut remaining = tx.shares;
                while remaining > 0.0 {
                    let Some(lot) = open.front_mut() else {
                        return StockBalance::unresolved();
                    };
                    if lot.shares > remaining {
                        lot.shares -= remaining;
                        remaining = 0.0;
                    } else {
                        remaining -= lot.shares;
                        open.pop_front();
                    }
                }
            }
            TxSide::Split => {
                let ratio = tx.shares;
                shares = (shares * ratio).floor();
                for lot in open.iter_mut() {
                    lot.price /= ratio;
                    lot.shares *= ratio;
                }
            }
        }
    }

    let open_shares: f64 = open.iter().map(|lot| lot.shares).sum();
    let vwap = if open_shares > 0.0 {
        open.iter().map(|lot| lot.price * lot.shares).sum::<f64>() / open_shares
    } else {
        0.0
    };

    StockBalance {
        shares,
        fee,
        liquidated,
        vwap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tx(side: TxSide, shares: f64, price: f64, fee: f64, day: u32) -> StockTransaction {
        StockTransaction {
            broker: "broker1".to_string(),
            side,
            shares,
            price,
            fee,
            date: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_stream_is_flat() {
        let balance = calc_balance([]);
        assert_eq!(balance.shares, 0.0);
        assert_eq!(balance.vwap, 0.0);
        assert_eq!(balance.fee, 0.0);
        assert_eq!(balance.liquidated, 0.0);
    }

    #[test]
    fn buys_then_full_sell_close_the_position() {
        let txs = vec![
            tx(TxSide::Buy, 10.0, 100.0, 1.0, 1),
            tx(TxSide::Buy, 20.0, 40.0, 1.0, 2),
            tx(TxSide::Sell, 30.0, 100.0, 1.0, 3),
        ];
        let balance = calc_balance(&txs);
        assert_eq!(balance.shares, 0.0);
        assert_eq!(balance.vwap, 0.0);
        assert_eq!(balance.fee, 3.0);
        // -10*100 - 20*40 + 30*100
        assert_eq!(balance.liquidated, 1200.0);
    }

    #[test]
    fn partial_sell_closes_oldest_lots_first() {
        let txs = vec![
            tx(TxSide::Buy, 10.0, 100.0, 0.0, 1),
            tx(TxSide::Buy, 10.0, 200.0, 0.0, 2),
            tx(TxSide::Sell, 15.0, 150.0, 0.0, 3),
        ];
        let balance = calc_balance(&txs);
        assert_eq!(balance.shares, 5.0);
        // only the tail of the second lot is open
        assert_eq!(balance.vwap, 200.0);
        assert_eq!(balance.liquidated, -1000.0 - 2000.0 + 2250.0);
    }

    #[test]
    fn split_rescales_lots_and_preserves_cost() {
        let txs = vec![
            tx(TxSide::Buy, 10.0, 100.0, 0.0, 1),
            tx(TxSide::Split, 2.0, 0.0, 0.0, 2),
            tx(TxSide::Sell, 5.0, 60.0, 0.0, 3),
        ];
        let balance = calc_balance(&txs);
        assert_eq!(balance.shares, 15.0);
        assert_eq!(balance.vwap, 50.0);
        assert_eq!(balance.liquidated, -1000.0 + 300.0);
    }

    #[test]
    fn split_floors_fractional_share_balance() {
        let txs = vec![
            tx(TxSide::Buy, 3.0, 90.0, 0.0, 1),
            tx(TxSide::Split, 1.5, 0.0, 0.0, 2),
        ];
        let balance = calc_balance(&txs);
        assert_eq!(balance.shares, 4.0);
        // open lots keep the exact scaled shares, so cost is preserved
        assert_eq!(balance.vwap, 60.0);
    }

    #[test]
    fn over_sell_yields_unresolved_balance() {
        let txs = vec![
            tx(TxSide::Buy, 5.0, 10.0, 0.0, 1),
            tx(TxSide::Sell, 10.0, 10.0, 0.0, 2),
        ];
        let balance = calc_balance(&txs);
        assert!(balance.is_unresolved());
        assert!(balance.shares.is_nan());
        assert!(balance.vwap.is_nan());
        assert!(balance.fee.is_nan());
        assert!(balance.liquidated.is_nan());
    }

    #[test]
    fn fees_accumulate_across_every_side() {
        let txs = vec![
            tx(TxSide::Buy, 10.0, 100.0, 1.5, 1),
            tx(TxSide::Split, 2.0, 0.0, 0.25, 2),
            tx(TxSide::Sell, 5.0, 120.0, 1.25, 3),
        ];
        let balance = calc_balance(&txs);
        assert_eq!(balance.fee, 3.0);
    }
}
