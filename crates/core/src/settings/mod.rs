//! Deployment settings for the engine.
//!
//! The core never reads configuration files itself; the embedding application
//! deserializes a `Settings` from wherever it keeps configuration and hands
//! it to the services that need it.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FUND_CURRENCY;

/// Deployment constants of one installation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Currency fund positions are valued and reported in. Broker fund
    /// reports carry no per-fund currency, so the whole fund category is
    /// denominated in this one.
    pub fund_currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            fund_currency: DEFAULT_FUND_CURRENCY.to_string(),
        }
    }
}
