//! Push-path price updater
//!
//! Keeps the record store fresh by re-resolving a symbol whenever the ledger
//! reports a price-affecting event, so push and pull paths agree on the
//! canonical price.

use super::PriceResolver;
use crate::ledger::LedgerEvent;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Re-resolves symbols in response to ledger events
pub struct PriceUpdater {
    resolver: Arc<dyn PriceResolver>,
}

impl PriceUpdater {
    /// Create an updater driving the given resolver
    pub fn new(resolver: Arc<dyn PriceResolver>) -> Self {
        Self { resolver }
    }

    /// Drain events until the channel closes.
    ///
    /// Per-event failures are logged and skipped; the next event for the
    /// same symbol retries naturally.
    pub async fn run(&self, mut events: mpsc::Receiver<LedgerEvent>) {
        while let Some(event) = events.recv().await {
            let symbol = event.symbol();
            match self.resolver.resolve(symbol).await {
                Ok(record) => {
                    tracing::debug!(
                        symbol,
                        price = %record.price,
                        source = %record.source,
                        "Updated price after ledger event"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        symbol,
                        error = %e,
                        "Failed to update price after ledger event"
                    );
                }
            }
        }
        tracing::info!("Ledger event channel closed, price updater stopping");
    }
}
