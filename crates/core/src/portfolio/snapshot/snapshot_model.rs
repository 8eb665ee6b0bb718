//! The immutable result of one "load assets" cycle.

use std::collections::BTreeSet;

use crate::brokers::Broker;
use crate::funds::{Fund, FundSummary};
use crate::portfolio::items::{build_asset_items, AssetItem};
use crate::portfolio::overview::{build_overview, build_sum_groups, GroupBy, Overview, SumGroup};
use crate::quotes::{Quote, QuoteIndex};
use crate::settings::Settings;
use crate::stocks::StockPortfolio;

/// Snapshot of all loaded positions and quotes.
///
/// Built once per `load_assets` cycle and never mutated afterwards; every
/// query below is a plain read, so concurrent queries against the same
/// snapshot are safe. A fresh load produces a new snapshot instead of
/// touching this one.
pub struct AssetSnapshot {
    pub brokers: Vec<Broker>,
    pub funds: Vec<Fund>,
    pub stocks: StockPortfolio,
    pub quotes: QuoteIndex,
    items: Vec<AssetItem>,
}

impl AssetSnapshot {
    pub(crate) fn new(
        brokers: Vec<Broker>,
        funds: Vec<Fund>,
        stocks: StockPortfolio,
        quotes: QuoteIndex,
        settings: &Settings,
    ) -> Self {
        let items = build_asset_items(&brokers, &funds, &stocks, &quotes, settings);
        AssetSnapshot {
            brokers,
            funds,
            stocks,
            quotes,
            items,
        }
    }

    /// The normalized asset items backing the overview queries.
    pub fn asset_items(&self) -> &[AssetItem] {
        &self.items
    }

    /// 3-level grouped summary, every figure converted into `main_ccy`.
    pub fn overview(
        &self,
        main_ccy: &str,
        level1: GroupBy,
        level2: GroupBy,
        level3: GroupBy,
    ) -> Overview {
        build_overview(&self.items, &self.quotes, main_ccy, level1, level2, level3)
    }

    /// Flat converted totals per key of `group`.
    pub fn sum_group(&self, main_ccy: &str, group: GroupBy) -> Vec<SumGroup> {
        build_sum_groups(&self.items, &self.quotes, main_ccy, group)
    }

    /// Latest quote for `symbol`, if the snapshot has one.
    pub fn latest_quote(&self, symbol: &str) -> Option<&Quote> {
        self.quotes.latest(symbol)
    }

    /// All currencies any asset item is denominated in.
    pub fn currencies(&self) -> BTreeSet<&str> {
        self.items.iter().map(|item| item.currency.as_str()).collect()
    }

    /// Quotes of every known currency pair.
    pub fn currency_pair_quotes(&self) -> Vec<&Quote> {
        self.quotes.currency_pair_quotes()
    }

    /// Aggregate fund figures, optionally restricted to one broker.
    pub fn fund_summary(&self, broker: Option<&str>) -> FundSummary {
        FundSummary::calculate(
            self.funds
                .iter()
                .filter(|fund| broker.map_or(true, |name| fund.broker == name)),
        )
    }
}
