//! Symbol registry collaborator
//!
//! Asset/contract registration is owned elsewhere on the platform; the
//! resolution service only needs a yes/no answer to distinguish an unknown
//! symbol from transient unavailability.

use async_trait::async_trait;
use std::collections::HashSet;

/// Trait for symbol registry implementations
#[async_trait]
pub trait SymbolRegistry: Send + Sync {
    /// Whether a contract is registered for the symbol on the network
    async fn is_known(&self, symbol: &str, network: &str) -> bool;
}

/// Registry backed by a fixed symbol set, typically loaded from config
pub struct StaticRegistry {
    network: String,
    symbols: HashSet<String>,
}

impl StaticRegistry {
    /// Create a registry for one network from an iterator of symbols
    pub fn new(network: impl Into<String>, symbols: impl IntoIterator<Item = String>) -> Self {
        Self {
            network: network.into(),
            symbols: symbols.into_iter().collect(),
        }
    }
}

#[async_trait]
impl SymbolRegistry for StaticRegistry {
    async fn is_known(&self, symbol: &str, network: &str) -> bool {
        network == self.network && self.symbols.contains(symbol)
    }
}
