//! Configuration types for pricer

use serde::Deserialize;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub pricing: PricingConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Price resolution and caching configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Reference stablecoin symbol, pegged at 1.00
    #[serde(default = "default_stable_symbol")]
    pub stable_symbol: String,

    /// Network the symbol contracts are deployed on
    #[serde(default = "default_network")]
    pub network: String,

    /// Cache entry freshness window (seconds)
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Overall timeout for one resolution call (milliseconds)
    #[serde(default = "default_resolve_timeout_ms")]
    pub resolve_timeout_ms: u64,
}

fn default_stable_symbol() -> String {
    "USDC".to_string()
}
fn default_network() -> String {
    "mainnet".to_string()
}
fn default_cache_ttl_secs() -> u64 {
    30
}
fn default_resolve_timeout_ms() -> u64 {
    10_000
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            stable_symbol: default_stable_symbol(),
            network: default_network(),
            cache_ttl_secs: default_cache_ttl_secs(),
            resolve_timeout_ms: default_resolve_timeout_ms(),
        }
    }
}

impl PricingConfig {
    /// Cache TTL as a duration
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Resolution timeout as a duration
    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_millis(self.resolve_timeout_ms)
    }
}

/// Remote price service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the price query interface
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

/// Symbol registry configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryConfig {
    /// Symbols with registered contracts on the configured network
    #[serde(default)]
    pub symbols: Vec<String>,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g. "info", "pricer=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON logs instead of the human-readable format
    #[serde(default)]
    pub json_logs: bool,

    /// Port for the Prometheus exporter; disabled when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
