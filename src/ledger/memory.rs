//! In-memory ledger implementation

use super::{FactSource, Order, OrderId, OrderSide, Trade};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct LedgerState {
    /// Last trade per symbol; newer executions replace older ones
    trades: HashMap<String, Trade>,
    /// Outstanding orders by id
    orders: HashMap<OrderId, Order>,
}

/// In-memory trade/order ledger.
///
/// Best bid is the highest-priced buy order, best ask the lowest-priced sell
/// order. Orders sharing the best price are ranked by earliest `placed_at`,
/// then by smallest order id, so selection is deterministic.
#[derive(Clone, Default)]
pub struct InMemoryLedger {
    inner: Arc<RwLock<LedgerState>>,
}

impl InMemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an executed trade, replacing the previous one for the symbol
    /// if this one is newer
    pub async fn record_trade(&self, trade: Trade) {
        let mut state = self.inner.write().await;
        let stale = state
            .trades
            .get(&trade.symbol)
            .is_some_and(|existing| existing.executed_at > trade.executed_at);
        if !stale {
            state.trades.insert(trade.symbol.clone(), trade);
        }
    }

    /// Place an outstanding order on the book
    pub async fn place_order(&self, order: Order) {
        let mut state = self.inner.write().await;
        state.orders.insert(order.id, order);
    }

    /// Remove an order from the book; returns whether it existed
    pub async fn cancel_order(&self, id: &OrderId) -> bool {
        let mut state = self.inner.write().await;
        state.orders.remove(id).is_some()
    }

    /// Best outstanding order for a symbol and side
    pub async fn best_order(&self, symbol: &str, side: OrderSide) -> Option<Order> {
        let state = self.inner.read().await;
        let mut best: Option<&Order> = None;
        for order in state.orders.values() {
            if order.symbol != symbol || order.side != side {
                continue;
            }
            match best {
                Some(incumbent) if !beats(order, incumbent, side) => {}
                _ => best = Some(order),
            }
        }
        best.cloned()
    }
}

/// Whether `candidate` outranks `incumbent` on the same side.
///
/// Price priority first (highest bid / lowest ask), then time priority,
/// then smallest id.
fn beats(candidate: &Order, incumbent: &Order, side: OrderSide) -> bool {
    match candidate.price.cmp(&incumbent.price) {
        Ordering::Greater => side == OrderSide::Buy,
        Ordering::Less => side == OrderSide::Sell,
        Ordering::Equal => match candidate.placed_at.cmp(&incumbent.placed_at) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => candidate.id < incumbent.id,
        },
    }
}

#[async_trait]
impl FactSource for InMemoryLedger {
    async fn latest_trade(&self, symbol: &str) -> anyhow::Result<Option<Decimal>> {
        let state = self.inner.read().await;
        Ok(state.trades.get(symbol).map(|t| t.price))
    }

    async fn best_buy_order(&self, symbol: &str) -> anyhow::Result<Option<Decimal>> {
        Ok(self.best_order(symbol, OrderSide::Buy).await.map(|o| o.price))
    }

    async fn best_sell_order(&self, symbol: &str) -> anyhow::Result<Option<Decimal>> {
        Ok(self
            .best_order(symbol, OrderSide::Sell)
            .await
            .map(|o| o.price))
    }
}
