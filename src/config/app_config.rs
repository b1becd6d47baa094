use serde::Deserialize;

use crate::infrastructure::cache::CacheType;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Prometheus exporter settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

/// Cache backend selection
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub backend: CacheType,
    pub redis_url: Option<String>,
    pub key_prefix: Option<String>,
    pub max_capacity: u64,
    /// When false, every analysis is recomputed
    pub enabled: bool,
    pub connection_timeout_secs: u64,
}

/// Per-operation TTLs and request limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub classify_ttl_secs: u64,
    pub summary_ttl_secs: u64,
    pub tags_ttl_secs: u64,
    pub resume_ttl_secs: u64,
    pub chat_ttl_secs: u64,
    pub default_summary_length: usize,
    pub max_summary_length: usize,
    pub max_content_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            backend: CacheType::InMemory,
            redis_url: None,
            key_prefix: Some("campus-insight".to_string()),
            max_capacity: 10_000,
            enabled: true,
            connection_timeout_secs: 5,
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            classify_ttl_secs: 7200,
            summary_ttl_secs: 3600,
            tags_ttl_secs: 3600,
            resume_ttl_secs: 3600,
            chat_ttl_secs: 3600,
            default_summary_length: 100,
            max_summary_length: 2000,
            max_content_chars: 100_000,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
