//! Analysis service configuration

use std::time::Duration;

use crate::config::AnalysisSettings;
use crate::domain::AnalysisOperation;

/// TTLs and input limits for [`AnalysisService`](super::AnalysisService)
#[derive(Debug, Clone)]
pub struct AnalysisServiceConfig {
    pub classify_ttl: Duration,
    pub summary_ttl: Duration,
    pub tags_ttl: Duration,
    pub resume_ttl: Duration,
    pub chat_ttl: Duration,
    /// Used when a caller gives no summary length
    pub default_summary_length: usize,
    pub max_summary_length: usize,
    pub max_content_chars: usize,
    /// Whether results are read from and written to the cache
    pub cache_enabled: bool,
}

impl Default for AnalysisServiceConfig {
    fn default() -> Self {
        Self::from(&AnalysisSettings::default())
    }
}

impl From<&AnalysisSettings> for AnalysisServiceConfig {
    fn from(settings: &AnalysisSettings) -> Self {
        Self {
            classify_ttl: Duration::from_secs(settings.classify_ttl_secs),
            summary_ttl: Duration::from_secs(settings.summary_ttl_secs),
            tags_ttl: Duration::from_secs(settings.tags_ttl_secs),
            resume_ttl: Duration::from_secs(settings.resume_ttl_secs),
            chat_ttl: Duration::from_secs(settings.chat_ttl_secs),
            default_summary_length: settings.default_summary_length,
            max_summary_length: settings.max_summary_length,
            max_content_chars: settings.max_content_chars,
            cache_enabled: true,
        }
    }
}

impl AnalysisServiceConfig {
    pub fn ttl_for(&self, operation: AnalysisOperation) -> Duration {
        match operation {
            AnalysisOperation::Classify => self.classify_ttl,
            AnalysisOperation::Summarize => self.summary_ttl,
            AnalysisOperation::Tags => self.tags_ttl,
            AnalysisOperation::Resume => self.resume_ttl,
            AnalysisOperation::Chat => self.chat_ttl,
        }
    }

    /// Sets the same TTL for every operation
    pub fn with_uniform_ttl(mut self, ttl: Duration) -> Self {
        self.classify_ttl = ttl;
        self.summary_ttl = ttl;
        self.tags_ttl = ttl;
        self.resume_ttl = ttl;
        self.chat_ttl = ttl;
        self
    }

    pub fn with_max_content_chars(mut self, max: usize) -> Self {
        self.max_content_chars = max;
        self
    }

    /// Disables caching
    pub fn without_cache(mut self) -> Self {
        self.cache_enabled = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        let config = AnalysisServiceConfig::default();

        assert_eq!(
            config.ttl_for(AnalysisOperation::Classify),
            Duration::from_secs(7200)
        );
        for op in [
            AnalysisOperation::Summarize,
            AnalysisOperation::Tags,
            AnalysisOperation::Resume,
            AnalysisOperation::Chat,
        ] {
            assert_eq!(config.ttl_for(op), Duration::from_secs(3600));
        }
        assert!(config.cache_enabled);
    }

    #[test]
    fn test_uniform_ttl() {
        let config = AnalysisServiceConfig::default().with_uniform_ttl(Duration::from_secs(5));
        assert!(
            AnalysisOperation::ALL
                .iter()
                .all(|op| config.ttl_for(*op) == Duration::from_secs(5))
        );
    }
}
