//! Price resolution module
//!
//! The tiered resolution policy, the service orchestrating it against the
//! record store, and the push-path updater driven by ledger events.

mod policy;
mod service;
mod types;
mod updater;

pub use policy::{resolve_price, FALLBACK_PRICE};
pub use service::ResolutionService;
pub use types::{PriceFacts, PriceRecord, PriceSource, ResolveError};
pub use updater::PriceUpdater;

use async_trait::async_trait;

/// Trait for price resolution implementations
///
/// Implemented by the in-process [`ResolutionService`] and by the remote
/// client in [`crate::api`]; the cache consumes either through this seam.
#[async_trait]
pub trait PriceResolver: Send + Sync {
    /// Resolve the current price record for a symbol on the configured
    /// network
    async fn resolve(&self, symbol: &str) -> Result<PriceRecord, ResolveError>;
}
