//! Broker source trait.
//!
//! Defines the contract for the backend that stores brokerage accounts,
//! without any storage-specific types.

use async_trait::async_trait;

use super::brokers_model::Broker;
use crate::errors::Result;

/// Capability interface over the backend holding broker records.
///
/// One implementation is selected at startup and injected into the services
/// that load data.
#[async_trait]
pub trait BrokerSourceTrait: Send + Sync {
    /// Lists every known broker with cash balances and active fund ids.
    async fn list_brokers(&self) -> Result<Vec<Broker>>;

    /// Looks up a single broker by name.
    async fn get_broker(&self, name: &str) -> Result<Option<Broker>>;
}
