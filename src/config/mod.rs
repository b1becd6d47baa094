//! Application configuration

mod app_config;

pub use app_config::{
    AnalysisSettings, AppConfig, CacheSettings, LogFormat, LoggingConfig, MetricsConfig,
    ServerConfig,
};
