//! Wire types for the price query interface

use crate::resolve::{PriceRecord, PriceSource};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Envelope returned by `GET /prices/{symbol}`.
///
/// `data` is present on success; `message`/`error` carry failure details.
#[derive(Debug, Deserialize)]
pub struct PriceEnvelope {
    /// Whether the query succeeded
    pub success: bool,
    /// Price payload, present when `success` is true
    #[serde(default)]
    pub data: Option<PriceData>,
    /// Human-readable failure description
    #[serde(default)]
    pub message: Option<String>,
    /// Internal error detail on 5xx responses
    #[serde(default)]
    pub error: Option<String>,
}

/// Price payload within a successful envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    /// Ticker symbol
    pub symbol: String,
    /// Price in the reference stablecoin
    pub price: Decimal,
    /// Which rule produced the price
    pub source: PriceSource,
    /// When the price was resolved
    pub last_update: DateTime<Utc>,
}

impl PriceData {
    /// Convert into the core record for the given network
    pub fn into_record(self, network: &str) -> PriceRecord {
        PriceRecord {
            symbol: self.symbol,
            network: network.to_string(),
            price: self.price,
            source: self.source,
            last_update: self.last_update,
        }
    }
}
