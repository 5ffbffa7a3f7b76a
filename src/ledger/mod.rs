//! Trade/order ledger collaborator
//!
//! The ledger itself is owned by the trading side of the platform; the
//! resolution service only asks it three read-only questions per symbol.
//! [`InMemoryLedger`] is the reference implementation used by tests and
//! local runs.

mod memory;
mod types;

pub use memory::InMemoryLedger;
pub use types::{LedgerEvent, Order, OrderId, OrderSide, Trade};

use async_trait::async_trait;
use rust_decimal::Decimal;

/// Read-only queries against externally-owned trade/order state.
///
/// `None` means no such fact exists; an `Err` means the ledger is
/// unreachable and resolution cannot proceed.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Most recent trade execution price for the symbol's reference pair
    async fn latest_trade(&self, symbol: &str) -> anyhow::Result<Option<Decimal>>;
    /// Best outstanding buy order price (highest bid)
    async fn best_buy_order(&self, symbol: &str) -> anyhow::Result<Option<Decimal>>;
    /// Best outstanding sell order price (lowest ask)
    async fn best_sell_order(&self, symbol: &str) -> anyhow::Result<Option<Decimal>>;
}
