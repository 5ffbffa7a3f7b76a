//! In-memory price record store

use super::RecordStore;
use crate::resolve::PriceRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory record store keyed by (symbol, network).
///
/// Upserts replace the whole record under a write lock, so concurrent
/// resolutions for the same symbol can race but never interleave into a
/// torn record.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<HashMap<(String, String), PriceRecord>>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get(&self, symbol: &str, network: &str) -> Option<PriceRecord> {
        let records = self.records.read().await;
        records
            .get(&(symbol.to_string(), network.to_string()))
            .cloned()
    }

    async fn upsert(&self, record: PriceRecord) {
        let mut records = self.records.write().await;
        let key = (record.symbol.clone(), record.network.clone());
        records.insert(key, record);
    }
}
