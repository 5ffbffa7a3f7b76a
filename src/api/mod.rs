//! Remote price query interface
//!
//! Client for the platform's `GET /prices/{symbol}` endpoint, used when the
//! cache runs in a different process than the resolution service.

mod client;
mod types;

pub use client::{RemoteClientConfig, RemotePriceClient};
pub use types::{PriceData, PriceEnvelope};
