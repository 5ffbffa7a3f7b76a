//! Prometheus metrics

use std::time::Duration;

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Cache served a fresh entry
    CacheHit,
    /// Cache had no fresh entry and resolved upstream
    CacheMiss,
    /// Cache returned the fallback constant after a transient failure
    CacheDegraded,
    /// Resolution succeeded
    ResolveOk,
    /// Resolution rejected an unregistered symbol
    ResolveUnknown,
    /// Resolution failed because upstream was unreachable
    ResolveUnavailable,
}

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// In-process policy resolution, facts to stored record
    Resolution,
    /// Round trip to the remote price query interface
    RemoteQuery,
}

/// Increment a counter by one
pub fn increment(metric: CounterMetric) {
    let metric_name = match metric {
        CounterMetric::CacheHit => "pricer_cache_hits_total",
        CounterMetric::CacheMiss => "pricer_cache_misses_total",
        CounterMetric::CacheDegraded => "pricer_cache_degraded_total",
        CounterMetric::ResolveOk => "pricer_resolve_ok_total",
        CounterMetric::ResolveUnknown => "pricer_resolve_unknown_total",
        CounterMetric::ResolveUnavailable => "pricer_resolve_unavailable_total",
    };

    metrics::counter!(metric_name).increment(1);
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::Resolution => "pricer_resolution_latency_ms",
        LatencyMetric::RemoteQuery => "pricer_remote_query_latency_ms",
    };

    metrics::histogram!(metric_name).record(duration.as_secs_f64() * 1000.0);
}
