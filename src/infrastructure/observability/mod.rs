//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use metrics::{
    CacheOutcome, PrometheusMetrics, create_metrics_router, init_metrics, record_cache_outcome,
    record_fallback, record_http_request,
};
