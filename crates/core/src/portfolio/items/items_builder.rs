//! Builds the normalized asset-item list from the loaded sources.

use log::warn;
use std::collections::BTreeMap;

use super::items_model::{AssetItem, AssetType};
use crate::brokers::Broker;
use crate::funds::Fund;
use crate::quotes::QuoteIndex;
use crate::settings::Settings;
use crate::stocks::{calc_balance, StockPortfolio, StockTransaction};

/// Builds one flat `AssetItem` list out of the three loaded position
/// sources.
///
/// A broker with no cash, no funds, or no open stock positions simply
/// contributes no rows for that category. A missing quote leaves NaN in the
/// affected row only; it never aborts the build.
pub fn build_asset_items(
    brokers: &[Broker],
    funds: &[Fund],
    stocks: &StockPortfolio,
    quotes: &QuoteIndex,
    settings: &Settings,
) -> Vec<AssetItem> {
    let mut items = Vec::new();
    collect_cash_items(brokers, &mut items);
    collect_fund_items(funds, settings, &mut items);
    collect_stock_items(stocks, quotes, &mut items);
    items
}

/// One row per (broker, currency) cash balance. Cash has no profit.
fn collect_cash_items(brokers: &[Broker], items: &mut Vec<AssetItem>) {
    for broker in brokers {
        for cash in &broker.cash_balances {
            items.push(AssetItem {
                asset_type: AssetType::Cash,
                broker: broker.name.clone(),
                currency: cash.currency.clone(),
                value: cash.balance,
                profit: 0.0,
            });
        }
    }
}

/// One row per broker, summing that broker's fund valuations. The fund
/// category is denominated in the configured fund currency.
fn collect_fund_items(funds: &[Fund], settings: &Settings, items: &mut Vec<AssetItem>) {
    let mut by_broker: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for fund in funds {
        let entry = by_broker.entry(fund.broker.as_str()).or_insert((0.0, 0.0));
        entry.0 += fund.market_value;
        entry.1 += fund.profit();
    }
    for (broker, (value, profit)) in by_broker {
        items.push(AssetItem {
            asset_type: AssetType::Funds,
            broker: broker.to_string(),
            currency: settings.fund_currency.clone(),
            value,
            profit,
        });
    }
}

/// Lot-matches every (instrument, broker) transaction group and merges the
/// surviving valuations per (broker, currency).
fn collect_stock_items(stocks: &StockPortfolio, quotes: &QuoteIndex, items: &mut Vec<AssetItem>) {
    let mut merged: BTreeMap<(String, String), (f64, f64)> = BTreeMap::new();

    for position in &stocks.positions {
        let symbol = &position.instrument.symbol;
        let mut by_broker: BTreeMap<&str, Vec<&StockTransaction>> = BTreeMap::new();
        for tx in &position.transactions {
            by_broker.entry(tx.broker.as_str()).or_default().push(tx);
        }

        for (broker, mut txs) in by_broker {
            // stable sort: same-date records keep their insertion order
            txs.sort_by_key(|tx| tx.date);
            let balance = calc_balance(txs.iter().copied());
            if balance.is_unresolved() {
                warn!(
                    "Excluding {} at {}: transactions sell more shares than were bought",
                    symbol, broker
                );
                continue;
            }
            if balance.shares == 0.0 {
                continue;
            }
            let price = quotes.price(symbol);
            let value = price * balance.shares;
            let profit = (price - balance.vwap) * balance.shares;
            let entry = merged
                .entry((broker.to_string(), position.instrument.currency.clone()))
                .or_insert((0.0, 0.0));
            entry.0 += value;
            entry.1 += profit;
        }
    }

    for ((broker, currency), (value, profit)) in merged {
        items.push(AssetItem {
            asset_type: AssetType::Stocks,
            broker,
            currency,
            value,
            profit,
        });
    }
}
