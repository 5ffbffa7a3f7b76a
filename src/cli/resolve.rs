//! Resolve command implementation

use crate::api::{RemoteClientConfig, RemotePriceClient};
use crate::config::Config;
use crate::resolve::PriceResolver;
use clap::Args;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Symbol to resolve
    pub symbol: String,
}

impl ResolveArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = RemotePriceClient::with_config(RemoteClientConfig {
            base_url: config.api.base_url.clone(),
            network: config.pricing.network.clone(),
            timeout: config.pricing.resolve_timeout(),
        });

        let record = client.resolve(&self.symbol).await?;

        println!("symbol:      {}", record.symbol);
        println!("network:     {}", record.network);
        println!("price:       {}", record.price);
        println!("source:      {}", record.source);
        println!("last update: {}", record.last_update.to_rfc3339());

        Ok(())
    }
}
