//! Infrastructure layer - cache backends, cached analysis and observability

pub mod analysis;
pub mod cache;
pub mod logging;
pub mod observability;
