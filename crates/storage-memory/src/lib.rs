//! In-memory source implementation for the assetfolio engine.
//!
//! This crate implements the source traits defined in `assetfolio-core` over
//! plain owned collections. It is the backend of choice for tests, demos and
//! deployments whose records arrive by import rather than from a live store;
//! cloud or database backends would implement the same traits in a sibling
//! crate.
//!
//! ```text
//! core (domain, traits)
//!          │
//!          ▼
//!  storage-memory (this crate)
//! ```

mod brokers;
mod funds;
mod quotes;
mod stocks;

pub use brokers::MemoryBrokerSource;
pub use funds::MemoryFundSource;
pub use quotes::MemoryQuoteSource;
pub use stocks::MemoryStockSource;
