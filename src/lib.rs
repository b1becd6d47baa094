//! Campus Insight
//!
//! Heuristic text analysis for the school platform:
//! - News classification, extractive summaries and tag generation
//! - Rule-based résumé scoring for recruitment
//! - Keyword-routed visitor chat
//!
//! Results are cached (in memory or in Redis) and every operation degrades to
//! recomputation when the cache is unavailable.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::analysis::{AnalysisService, AnalysisServiceConfig};
use infrastructure::cache::{CacheConfig, CacheFactory};

/// Builds the analysis service from configuration
///
/// An unreachable Redis falls back to the in-memory cache; a Redis backend
/// without a URL is a configuration error.
pub async fn create_analysis_service(config: &AppConfig) -> anyhow::Result<AnalysisService> {
    let cache = CacheFactory::new()
        .create_or_fallback(&CacheConfig::from(&config.cache))
        .await?;

    let mut service_config = AnalysisServiceConfig::from(&config.analysis);
    if !config.cache.enabled {
        service_config = service_config.without_cache();
    }

    Ok(AnalysisService::with_config(cache, service_config))
}

pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let service = create_analysis_service(config).await?;
    Ok(AppState::new(Arc::new(service)))
}
