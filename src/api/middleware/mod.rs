//! API middleware components

pub mod logging;
pub mod metrics;
pub mod security;

pub use logging::{REQUEST_ID_HEADER, logging_middleware};
pub use metrics::metrics_middleware;
pub use security::security_headers_middleware;
