//! Price resolution types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Provenance tag recording which rule produced a price.
///
/// Trust order: `Trade` > `BuyOrder` > `SellOrder` > `Fallback`. The policy
/// consults tiers in this order whenever multiple facts are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// Last executed trade against the reference pair
    Trade,
    /// Best outstanding buy order (highest bid)
    BuyOrder,
    /// Best outstanding sell order (lowest ask)
    SellOrder,
    /// No usable market fact; constant 1.00
    Fallback,
}

impl PriceSource {
    /// Wire/display tag for this source
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSource::Trade => "trade",
            PriceSource::BuyOrder => "buy_order",
            PriceSource::SellOrder => "sell_order",
            PriceSource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authoritative resolved price for a symbol on a network.
///
/// `price` is always expressed in the platform's reference stablecoin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Ticker symbol, unique within the network
    pub symbol: String,
    /// Network the symbol's contract is deployed on
    pub network: String,
    /// Resolved price in the reference stablecoin
    pub price: Decimal,
    /// Which rule produced the price
    pub source: PriceSource,
    /// When this record was resolved
    pub last_update: DateTime<Utc>,
}

/// The market facts the policy consumes for one symbol.
///
/// Each fact is the price of the symbol against the reference stablecoin.
/// `None` means no such fact exists.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceFacts {
    /// Most recent trade execution price
    pub last_trade: Option<Decimal>,
    /// Best outstanding buy order price (highest bid)
    pub best_bid: Option<Decimal>,
    /// Best outstanding sell order price (lowest ask)
    pub best_ask: Option<Decimal>,
}

/// Price resolution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No contract is registered for the symbol on this network. Definitive
    /// negative; never defaulted to fallback pricing.
    #[error("unknown symbol {symbol} on network {network}")]
    UnknownSymbol {
        /// Requested symbol
        symbol: String,
        /// Network the lookup ran against
        network: String,
    },
    /// Upstream ledger or price service unreachable or timed out. Transient;
    /// retried on the caller's next attempt.
    #[error("price resolution unavailable: {0}")]
    Unavailable(String),
}
