//! Trade and order ledger types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order identifier
pub type OrderId = Uuid;

/// Side of an outstanding order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Bid for the symbol, priced in the reference stablecoin
    Buy,
    /// Offer of the symbol, priced in the reference stablecoin
    Sell,
}

/// An executed trade against the reference pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Symbol traded
    pub symbol: String,
    /// Execution price in the reference stablecoin
    pub price: Decimal,
    /// Execution timestamp
    pub executed_at: DateTime<Utc>,
}

/// An outstanding order on the book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub id: OrderId,
    /// Symbol the order is for
    pub symbol: String,
    /// Order side
    pub side: OrderSide,
    /// Order price in the reference stablecoin
    pub price: Decimal,
    /// Placement timestamp; breaks ties between equal-priced orders
    pub placed_at: DateTime<Utc>,
}

/// Notification that ledger state changed for a symbol.
///
/// Producers emit these after recording the underlying trade or order; the
/// price updater re-resolves the touched symbol in response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    /// A trade executed against the reference pair
    TradeExecuted {
        /// Symbol traded
        symbol: String,
    },
    /// An order entered the book
    OrderPlaced {
        /// Symbol the order is for
        symbol: String,
    },
    /// An order left the book
    OrderCancelled {
        /// Symbol the order was for
        symbol: String,
    },
}

impl LedgerEvent {
    /// The symbol whose price facts this event may have changed
    pub fn symbol(&self) -> &str {
        match self {
            LedgerEvent::TradeExecuted { symbol }
            | LedgerEvent::OrderPlaced { symbol }
            | LedgerEvent::OrderCancelled { symbol } => symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_side_serde() {
        let json = serde_json::to_string(&OrderSide::Buy).unwrap();
        assert_eq!(json, "\"buy\"");
        let side: OrderSide = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(side, OrderSide::Sell);
    }

    #[test]
    fn test_trade_creation() {
        let trade = Trade {
            symbol: "CLB".to_string(),
            price: dec!(3.20),
            executed_at: Utc::now(),
        };
        assert_eq!(trade.symbol, "CLB");
        assert_eq!(trade.price, dec!(3.20));
    }

    #[test]
    fn test_ledger_event_symbol() {
        let event = LedgerEvent::TradeExecuted {
            symbol: "CLB".to_string(),
        };
        assert_eq!(event.symbol(), "CLB");

        let event = LedgerEvent::OrderCancelled {
            symbol: "GLDT".to_string(),
        };
        assert_eq!(event.symbol(), "GLDT");
    }
}
