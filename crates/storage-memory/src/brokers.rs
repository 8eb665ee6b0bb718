use async_trait::async_trait;
use log::debug;

use assetfolio_core::brokers::{Broker, BrokerSourceTrait};
use assetfolio_core::Result;

/// Broker source backed by an owned broker list.
pub struct MemoryBrokerSource {
    brokers: Vec<Broker>,
}

impl MemoryBrokerSource {
    pub fn new(brokers: Vec<Broker>) -> Self {
        Self { brokers }
    }
}

#[async_trait]
impl BrokerSourceTrait for MemoryBrokerSource {
    async fn list_brokers(&self) -> Result<Vec<Broker>> {
        debug!("listing {} brokers", self.brokers.len());
        Ok(self.brokers.clone())
    }

    async fn get_broker(&self, name: &str) -> Result<Option<Broker>> {
        Ok(self
            .brokers
            .iter()
            .find(|broker| broker.name == name)
            .cloned())
    }
}
