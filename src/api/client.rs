//! HTTP client for the price query interface

use super::PriceEnvelope;
use crate::resolve::{PriceRecord, PriceResolver, ResolveError};
use crate::telemetry::{self, LatencyMetric};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};

/// Configuration for the remote price client
#[derive(Debug, Clone)]
pub struct RemoteClientConfig {
    /// Base URL of the price service
    pub base_url: String,
    /// Network the queries are scoped to
    pub network: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for RemoteClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            network: "mainnet".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the platform's price query interface.
///
/// Maps the wire envelope onto the same typed results the in-process
/// service produces: 404 is a definitive `UnknownSymbol`, everything else
/// that isn't a well-formed success is `Unavailable`.
pub struct RemotePriceClient {
    config: RemoteClientConfig,
    client: Client,
}

impl RemotePriceClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(RemoteClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: RemoteClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

impl Default for RemotePriceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceResolver for RemotePriceClient {
    async fn resolve(&self, symbol: &str) -> Result<PriceRecord, ResolveError> {
        let url = format!("{}/prices/{}", self.config.base_url, symbol);
        tracing::debug!(url = %url, network = %self.config.network, "Querying price service");

        let started = Instant::now();
        let response = self
            .client
            .get(&url)
            .query(&[("network", self.config.network.as_str())])
            .send()
            .await
            .map_err(|e| ResolveError::Unavailable(format!("request error: {e}")))?;
        telemetry::record_latency(LatencyMetric::RemoteQuery, started.elapsed());

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ResolveError::UnknownSymbol {
                symbol: symbol.to_string(),
                network: self.config.network.clone(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResolveError::Unavailable(format!(
                "price service error: {status} - {body}"
            )));
        }

        let envelope: PriceEnvelope = response
            .json()
            .await
            .map_err(|e| ResolveError::Unavailable(format!("malformed price response: {e}")))?;

        if !envelope.success {
            let message = envelope
                .message
                .or(envelope.error)
                .unwrap_or_else(|| "price service reported failure".to_string());
            return Err(ResolveError::Unavailable(message));
        }

        let data = envelope.data.ok_or_else(|| {
            ResolveError::Unavailable("price response missing data".to_string())
        })?;

        Ok(data.into_record(&self.config.network))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RemotePriceClient::new();
        assert_eq!(client.config.base_url, "http://localhost:8080");
        assert_eq!(client.config.network, "mainnet");
    }

    #[test]
    fn test_custom_config() {
        let config = RemoteClientConfig {
            base_url: "https://prices.example.com".to_string(),
            network: "testnet".to_string(),
            timeout: Duration::from_secs(3),
        };

        let client = RemotePriceClient::with_config(config);
        assert_eq!(client.config.base_url, "https://prices.example.com");
        assert_eq!(client.config.timeout, Duration::from_secs(3));
    }
}
