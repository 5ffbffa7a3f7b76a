//! TTL price cache over a price resolver

use crate::resolve::{PriceResolver, PriceSource, ResolveError, FALLBACK_PRICE};
use crate::telemetry::{self, CounterMetric};
use futures_util::future::join_all;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

/// Configuration for the price cache
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Reference stablecoin symbol, answered as 1.00 without any I/O
    pub stable_symbol: String,
    /// Entry freshness window
    pub ttl: Duration,
    /// Overall timeout for one resolution call
    pub resolve_timeout: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stable_symbol: "USDC".to_string(),
            ttl: Duration::from_secs(30),
            resolve_timeout: Duration::from_secs(10),
        }
    }
}

/// A cached price with provenance; always replaced as a whole
#[derive(Debug, Clone)]
struct CacheEntry {
    price: Decimal,
    source: PriceSource,
    cached_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() < ttl
    }
}

/// Caller-facing price cache.
///
/// Safe under concurrent `get_price`/`get_prices` calls from many tasks.
/// Concurrent misses for the same symbol collapse into a single upstream
/// resolution: the first caller holds the symbol's guard while resolving,
/// waiters re-check the cache once the guard frees.
///
/// Transient upstream failures degrade to the fallback constant without
/// caching it, so the next call retries. An unknown symbol is a definitive
/// negative and surfaces as an error instead — returning 1.00 for a
/// nonexistent asset would be a correctness bug, not graceful degradation.
pub struct PriceCache {
    resolver: Arc<dyn PriceResolver>,
    config: CacheConfig,
    entries: RwLock<HashMap<String, CacheEntry>>,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl PriceCache {
    /// Create a cache over the given resolver
    pub fn new(resolver: Arc<dyn PriceResolver>, config: CacheConfig) -> Self {
        Self {
            resolver,
            config,
            entries: RwLock::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Current price for a symbol, served from cache when fresh.
    ///
    /// Only a miss suspends on I/O; hits and the stablecoin short-circuit
    /// return immediately.
    pub async fn get_price(&self, symbol: &str) -> Result<Decimal, ResolveError> {
        if symbol == self.config.stable_symbol {
            return Ok(Decimal::ONE);
        }

        if let Some(price) = self.fresh_price(symbol).await {
            telemetry::increment(CounterMetric::CacheHit);
            return Ok(price);
        }
        telemetry::increment(CounterMetric::CacheMiss);

        let guard = self.symbol_guard(symbol).await;
        let _held = guard.lock().await;

        // Another caller may have finished this symbol's resolution while
        // we waited on the guard
        if let Some(price) = self.fresh_price(symbol).await {
            return Ok(price);
        }

        match tokio::time::timeout(self.config.resolve_timeout, self.resolver.resolve(symbol))
            .await
        {
            Ok(Ok(record)) => {
                let entry = CacheEntry {
                    price: record.price,
                    source: record.source,
                    cached_at: Instant::now(),
                };
                self.entries
                    .write()
                    .await
                    .insert(symbol.to_string(), entry);
                tracing::debug!(
                    symbol,
                    price = %record.price,
                    source = %record.source,
                    "Cached resolved price"
                );
                Ok(record.price)
            }
            Ok(Err(err @ ResolveError::UnknownSymbol { .. })) => Err(err),
            Ok(Err(err @ ResolveError::Unavailable(_))) => {
                telemetry::increment(CounterMetric::CacheDegraded);
                tracing::warn!(symbol, error = %err, "Price resolution failed, serving fallback");
                Ok(FALLBACK_PRICE)
            }
            Err(_elapsed) => {
                telemetry::increment(CounterMetric::CacheDegraded);
                tracing::warn!(
                    symbol,
                    timeout_ms = self.config.resolve_timeout.as_millis() as u64,
                    "Price resolution timed out, serving fallback"
                );
                Ok(FALLBACK_PRICE)
            }
        }
    }

    /// Current prices for a set of symbols, resolved concurrently.
    ///
    /// The mapping is always complete: a symbol that cannot be resolved maps
    /// to the fallback constant, and one symbol's failure never fails the
    /// batch for the others.
    pub async fn get_prices(&self, symbols: &[String]) -> HashMap<String, Decimal> {
        let lookups = symbols.iter().map(|symbol| async move {
            let price = match self.get_price(symbol).await {
                Ok(price) => price,
                Err(err) => {
                    tracing::warn!(
                        symbol = symbol.as_str(),
                        error = %err,
                        "Serving fallback for unresolvable symbol in batch"
                    );
                    FALLBACK_PRICE
                }
            };
            (symbol.clone(), price)
        });

        join_all(lookups).await.into_iter().collect()
    }

    /// Drop all entries; the next call per symbol re-resolves
    pub async fn clear(&self) {
        self.entries.write().await.clear();
        tracing::debug!("Price cache cleared");
    }

    async fn fresh_price(&self, symbol: &str) -> Option<Decimal> {
        let entries = self.entries.read().await;
        entries
            .get(symbol)
            .filter(|e| e.is_fresh(self.config.ttl))
            .map(|e| e.price)
    }

    /// Per-symbol guard collapsing concurrent misses into one resolution.
    ///
    /// Guards live for the process lifetime; the map is bounded by the set
    /// of symbols ever requested.
    async fn symbol_guard(&self, symbol: &str) -> Arc<Mutex<()>> {
        let mut in_flight = self.in_flight.lock().await;
        in_flight
            .entry(symbol.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.stable_symbol, "USDC");
        assert_eq!(config.ttl, Duration::from_secs(30));
        assert_eq!(config.resolve_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_entry_freshness() {
        let entry = CacheEntry {
            price: Decimal::ONE,
            source: PriceSource::Trade,
            cached_at: Instant::now(),
        };
        assert!(entry.is_fresh(Duration::from_secs(30)));
        assert!(!entry.is_fresh(Duration::ZERO));
    }
}
