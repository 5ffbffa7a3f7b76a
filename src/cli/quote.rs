//! Quote command implementation

use crate::api::{RemoteClientConfig, RemotePriceClient};
use crate::cache::{CacheConfig, PriceCache};
use crate::config::Config;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Symbols to quote
    #[arg(required = true)]
    pub symbols: Vec<String>,
}

impl QuoteArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = RemotePriceClient::with_config(RemoteClientConfig {
            base_url: config.api.base_url.clone(),
            network: config.pricing.network.clone(),
            timeout: config.pricing.resolve_timeout(),
        });
        let cache = PriceCache::new(
            Arc::new(client),
            CacheConfig {
                stable_symbol: config.pricing.stable_symbol.clone(),
                ttl: config.pricing.cache_ttl(),
                resolve_timeout: config.pricing.resolve_timeout(),
            },
        );

        let prices = cache.get_prices(&self.symbols).await;

        for symbol in &self.symbols {
            if let Some(price) = prices.get(symbol) {
                println!("{symbol}  {price}");
            }
        }

        Ok(())
    }
}
