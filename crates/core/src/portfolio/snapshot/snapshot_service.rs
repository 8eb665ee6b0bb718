//! Coordinates the four asynchronous source loads behind one snapshot.

use async_trait::async_trait;
use log::{debug, error};
use std::sync::{Arc, Mutex};

use super::snapshot_model::AssetSnapshot;
use super::snapshot_traits::SnapshotServiceTrait;
use crate::brokers::BrokerSourceTrait;
use crate::errors::{Error, Result};
use crate::funds::FundSourceTrait;
use crate::quotes::{QuoteIndex, QuoteSourceTrait};
use crate::settings::Settings;
use crate::stocks::StockSourceTrait;

const STAGE_QUOTES: u8 = 0b0001;
const STAGE_BROKERS: u8 = 0b0010;
const STAGE_STOCKS: u8 = 0b0100;
const STAGE_FUNDS: u8 = 0b1000;
const STAGE_ALL: u8 = 0b1111;

/// Tracks which sources have completed during one load cycle.
#[derive(Default)]
struct LoadProgress {
    done: u8,
}

impl LoadProgress {
    /// Marks `stage` complete. Returns true exactly once, on the transition
    /// that sets the last remaining bit.
    fn mark(&mut self, stage: u8) -> bool {
        let was_complete = self.done == STAGE_ALL;
        self.done |= stage;
        !was_complete && self.done == STAGE_ALL
    }
}

/// Drives the four data loads and assembles immutable snapshots.
///
/// Quotes and brokers load in parallel. Stocks wait for quotes (valuation
/// needs prices) and funds wait for brokers (fund selection needs each
/// broker's active-fund list); no other ordering is imposed.
pub struct SnapshotService {
    broker_source: Arc<dyn BrokerSourceTrait>,
    fund_source: Arc<dyn FundSourceTrait>,
    stock_source: Arc<dyn StockSourceTrait>,
    quote_source: Arc<dyn QuoteSourceTrait>,
    settings: Settings,
}

impl SnapshotService {
    pub fn new(
        broker_source: Arc<dyn BrokerSourceTrait>,
        fund_source: Arc<dyn FundSourceTrait>,
        stock_source: Arc<dyn StockSourceTrait>,
        quote_source: Arc<dyn QuoteSourceTrait>,
        settings: Settings,
    ) -> Self {
        Self {
            broker_source,
            fund_source,
            stock_source,
            quote_source,
            settings,
        }
    }

    fn complete(progress: &Mutex<LoadProgress>, stage: u8, name: &str) {
        if let Ok(mut progress) = progress.lock() {
            debug!("{} loaded", name);
            if progress.mark(stage) {
                debug!("all asset sources loaded");
            }
        }
    }
}

#[async_trait]
impl SnapshotServiceTrait for SnapshotService {
    /// Loads all four sources and returns the assembled snapshot.
    ///
    /// Fails as a whole when any source fails; a partial snapshot is never
    /// returned. The caller owns the snapshot; the service keeps no
    /// reference to it.
    async fn load_assets(&self) -> Result<Arc<AssetSnapshot>> {
        let progress = Mutex::new(LoadProgress::default());

        let quotes_then_stocks = async {
            let quotes = self.quote_source.latest_quotes(None).await?;
            Self::complete(&progress, STAGE_QUOTES, "quotes");
            let stocks = self
                .stock_source
                .list_stock_transactions(None, None)
                .await?;
            Self::complete(&progress, STAGE_STOCKS, "stocks");
            Ok::<_, Error>((quotes, stocks))
        };

        let brokers_then_funds = async {
            let brokers = self.broker_source.list_brokers().await?;
            Self::complete(&progress, STAGE_BROKERS, "brokers");
            let fund_ids: Vec<String> = brokers
                .iter()
                .flat_map(|broker| broker.active_fund_ids.iter().cloned())
                .collect();
            let funds = self.fund_source.list_funds(&fund_ids).await?;
            Self::complete(&progress, STAGE_FUNDS, "funds");
            Ok::<_, Error>((brokers, funds))
        };

        let ((quotes, stocks), (brokers, funds)) =
            match futures::try_join!(quotes_then_stocks, brokers_then_funds) {
                Ok(loaded) => loaded,
                Err(e) => {
                    error!("Asset load failed: {}", e);
                    return Err(e);
                }
            };

        let quote_index = QuoteIndex::new(quotes, stocks.known_symbols());
        Ok(Arc::new(AssetSnapshot::new(
            brokers,
            funds,
            stocks,
            quote_index,
            &self.settings,
        )))
    }
}
