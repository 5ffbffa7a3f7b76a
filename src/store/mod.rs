//! Authoritative price record store
//!
//! Single source of truth for resolved prices, keyed by (symbol, network)
//! and mutated only by the resolution pipeline. Potentially shared by many
//! service replicas, so upserts must be whole-record and never torn.

mod memory;

pub use memory::InMemoryStore;

use crate::resolve::PriceRecord;
use async_trait::async_trait;

/// Trait for price record store implementations
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the current record for a symbol on a network
    async fn get(&self, symbol: &str, network: &str) -> Option<PriceRecord>;

    /// Replace the record stored under the record's (symbol, network) key.
    ///
    /// Idempotent and last-writer-wins on `last_update`: losing a race to a
    /// slightly-stale overwrite is tolerable, a partial record is not.
    async fn upsert(&self, record: PriceRecord);
}
