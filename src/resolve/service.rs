//! Price resolution service

use super::{resolve_price, PriceFacts, PriceRecord, PriceResolver, ResolveError};
use crate::ledger::FactSource;
use crate::registry::SymbolRegistry;
use crate::store::RecordStore;
use crate::telemetry::{self, CounterMetric, LatencyMetric};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

/// Orchestrates policy evaluation against the record store.
///
/// Every successful resolution is an upsert, so the store stays an
/// always-fresh materialized view of policy output. Failures are surfaced
/// distinctly; the service never substitutes fallback pricing on its own —
/// that decision belongs to the cache layer.
pub struct ResolutionService {
    registry: Arc<dyn SymbolRegistry>,
    ledger: Arc<dyn FactSource>,
    store: Arc<dyn RecordStore>,
    stable_symbol: String,
    network: String,
}

impl ResolutionService {
    /// Create a service for one network
    pub fn new(
        registry: Arc<dyn SymbolRegistry>,
        ledger: Arc<dyn FactSource>,
        store: Arc<dyn RecordStore>,
        stable_symbol: impl Into<String>,
        network: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            ledger,
            store,
            stable_symbol: stable_symbol.into(),
            network: network.into(),
        }
    }

    /// Fetch the current facts for a symbol from the ledger.
    ///
    /// One unreachable fact makes the whole resolution unavailable; partial
    /// fact sets would silently skew the tier selection.
    async fn fetch_facts(&self, symbol: &str) -> anyhow::Result<PriceFacts> {
        let last_trade = self.ledger.latest_trade(symbol).await?;
        let best_bid = self.ledger.best_buy_order(symbol).await?;
        let best_ask = self.ledger.best_sell_order(symbol).await?;
        Ok(PriceFacts {
            last_trade,
            best_bid,
            best_ask,
        })
    }
}

#[async_trait]
impl PriceResolver for ResolutionService {
    async fn resolve(&self, symbol: &str) -> Result<PriceRecord, ResolveError> {
        let started = Instant::now();

        if !self.registry.is_known(symbol, &self.network).await {
            telemetry::increment(CounterMetric::ResolveUnknown);
            return Err(ResolveError::UnknownSymbol {
                symbol: symbol.to_string(),
                network: self.network.clone(),
            });
        }

        // The stablecoin is pegged by definition and never consults the
        // ledger; a ledger outage must not make it unavailable
        let facts = if symbol == self.stable_symbol {
            PriceFacts::default()
        } else {
            self.fetch_facts(symbol).await.map_err(|e| {
                telemetry::increment(CounterMetric::ResolveUnavailable);
                ResolveError::Unavailable(e.to_string())
            })?
        };

        let (price, source) = resolve_price(symbol, &self.stable_symbol, &facts);
        let record = PriceRecord {
            symbol: symbol.to_string(),
            network: self.network.clone(),
            price,
            source,
            last_update: Utc::now(),
        };

        self.store.upsert(record.clone()).await;

        telemetry::increment(CounterMetric::ResolveOk);
        telemetry::record_latency(LatencyMetric::Resolution, started.elapsed());
        tracing::debug!(
            symbol,
            price = %record.price,
            source = %record.source,
            "Resolved price"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::InMemoryLedger;
    use crate::registry::StaticRegistry;
    use crate::resolve::PriceSource;
    use crate::store::InMemoryStore;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    const STABLE: &str = "USDC";
    const NETWORK: &str = "mainnet";

    fn service_with(
        ledger: Arc<dyn FactSource>,
        store: Arc<InMemoryStore>,
    ) -> ResolutionService {
        let registry = StaticRegistry::new(
            NETWORK,
            vec![STABLE.to_string(), "CLB".to_string(), "GLDT".to_string()],
        );
        ResolutionService::new(Arc::new(registry), ledger, store, STABLE, NETWORK)
    }

    struct DownLedger;

    #[async_trait]
    impl FactSource for DownLedger {
        async fn latest_trade(&self, _symbol: &str) -> anyhow::Result<Option<Decimal>> {
            anyhow::bail!("ledger unreachable")
        }
        async fn best_buy_order(&self, _symbol: &str) -> anyhow::Result<Option<Decimal>> {
            anyhow::bail!("ledger unreachable")
        }
        async fn best_sell_order(&self, _symbol: &str) -> anyhow::Result<Option<Decimal>> {
            anyhow::bail!("ledger unreachable")
        }
    }

    #[tokio::test]
    async fn test_unknown_symbol() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(Arc::new(InMemoryLedger::new()), Arc::clone(&store));

        let err = service.resolve("DOESNOTEXIST").await.unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownSymbol {
                symbol: "DOESNOTEXIST".to_string(),
                network: NETWORK.to_string(),
            }
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_resolution_upserts_store() {
        let ledger = Arc::new(InMemoryLedger::new());
        ledger
            .record_trade(crate::ledger::Trade {
                symbol: "CLB".to_string(),
                price: dec!(3.20),
                executed_at: Utc::now(),
            })
            .await;
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(ledger, Arc::clone(&store));

        let record = service.resolve("CLB").await.unwrap();
        assert_eq!(record.price, dec!(3.20));
        assert_eq!(record.source, PriceSource::Trade);

        let stored = store.get("CLB", NETWORK).await.unwrap();
        assert_eq!(stored.price, dec!(3.20));
        assert_eq!(stored.source, PriceSource::Trade);
    }

    #[tokio::test]
    async fn test_no_facts_resolves_to_fallback() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(Arc::new(InMemoryLedger::new()), Arc::clone(&store));

        let record = service.resolve("GLDT").await.unwrap();
        assert_eq!(record.price, dec!(1.00));
        assert_eq!(record.source, PriceSource::Fallback);
    }

    #[tokio::test]
    async fn test_unavailable_ledger_surfaces_and_leaves_store_untouched() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(Arc::new(DownLedger), Arc::clone(&store));

        let err = service.resolve("CLB").await.unwrap_err();
        assert!(matches!(err, ResolveError::Unavailable(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_stablecoin_resolves_even_with_ledger_down() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(Arc::new(DownLedger), Arc::clone(&store));

        let record = service.resolve(STABLE).await.unwrap();
        assert_eq!(record.price, dec!(1.00));
        assert_eq!(record.source, PriceSource::Trade);
    }
}
