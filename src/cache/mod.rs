//! Read-side price cache
//!
//! Shields callers from resolution cost and transient upstream failures.

mod price_cache;

pub use price_cache::{CacheConfig, PriceCache};
