//! Cache-through orchestration of the analyzers

use std::sync::Arc;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};

use crate::domain::analysis::{self, rules};
use crate::domain::cache::{Cache, CacheExt, CacheKeyGenerator, CacheKeyParams, DigestKeyGenerator};
use crate::domain::{AnalysisOperation, ChatReply, DomainError, Intent, ResumeAnalysis, ResumeProfile};
use crate::infrastructure::observability::{CacheOutcome, record_cache_outcome, record_fallback};

use super::config::AnalysisServiceConfig;

/// Category, summary and tags of one news article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    pub category: String,
    pub summary: String,
    pub tags: Vec<String>,
}

/// Runs the analyzers behind a shared cache
///
/// Every operation is total: cache failures degrade to recomputation and
/// analyzer failures answer with the operation's fallback value.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    cache: Arc<dyn Cache>,
    config: AnalysisServiceConfig,
    key_generator: DigestKeyGenerator,
}

impl AnalysisService {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self::with_config(cache, AnalysisServiceConfig::default())
    }

    pub fn with_config(cache: Arc<dyn Cache>, config: AnalysisServiceConfig) -> Self {
        Self {
            cache,
            config,
            key_generator: DigestKeyGenerator::new(),
        }
    }

    pub fn config(&self) -> &AnalysisServiceConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<dyn Cache> {
        &self.cache
    }

    /// Cache key for `operation` over `input`, e.g. `summary:<digest>:100`
    pub fn cache_key(&self, operation: AnalysisOperation, params: &CacheKeyParams) -> String {
        self.key_generator
            .generate_with_namespace(operation.key_prefix(), params)
    }

    /// Rejects content above the configured size
    pub fn validate_content(&self, field: &str, content: &str) -> Result<(), DomainError> {
        let chars = content.chars().count();
        if chars > self.config.max_content_chars {
            return Err(DomainError::validation(format!(
                "{} is too long: {} characters (max {})",
                field, chars, self.config.max_content_chars
            )));
        }
        Ok(())
    }

    /// Resolves an optional summary length against the configured bounds
    pub fn resolve_summary_length(&self, requested: Option<usize>) -> Result<usize, DomainError> {
        let length = requested.unwrap_or(self.config.default_summary_length);
        if length == 0 || length > self.config.max_summary_length {
            return Err(DomainError::validation(format!(
                "summary length must be between 1 and {}, got {}",
                self.config.max_summary_length, length
            )));
        }
        Ok(length)
    }

    #[instrument(skip(self, content), fields(chars = content.len()))]
    pub async fn classify(&self, content: &str) -> String {
        let key = self.cache_key(AnalysisOperation::Classify, &CacheKeyParams::new(content));

        self.cached(
            AnalysisOperation::Classify,
            &key,
            || Ok(analysis::classify(content).to_string()),
            || rules::FALLBACK_CATEGORY.to_string(),
        )
        .await
    }

    /// Summarizes with `max_length`, or the configured default length
    #[instrument(skip(self, content), fields(chars = content.len()))]
    pub async fn summarize(&self, content: &str, max_length: Option<usize>) -> String {
        let max_length = max_length.unwrap_or(self.config.default_summary_length);
        let params =
            CacheKeyParams::new(content).with_component("max_length", max_length.to_string());
        let key = self.cache_key(AnalysisOperation::Summarize, &params);

        self.cached(
            AnalysisOperation::Summarize,
            &key,
            || Ok(analysis::summarize(content, max_length)),
            || content.chars().take(max_length).collect(),
        )
        .await
    }

    #[instrument(skip(self, content), fields(chars = content.len()))]
    pub async fn generate_tags(&self, content: &str) -> Vec<String> {
        let key = self.cache_key(AnalysisOperation::Tags, &CacheKeyParams::new(content));

        self.cached(
            AnalysisOperation::Tags,
            &key,
            || Ok(analysis::generate_tags(content)),
            Vec::new,
        )
        .await
    }

    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn analyze_resume(&self, text: &str) -> ResumeAnalysis {
        let key = self.cache_key(AnalysisOperation::Resume, &CacheKeyParams::new(text));

        self.cached(
            AnalysisOperation::Resume,
            &key,
            || analysis::try_analyze_resume(text),
            ResumeAnalysis::fallback,
        )
        .await
    }

    /// Scores a structured profile through its rendered text
    pub async fn analyze_profile(&self, profile: &ResumeProfile) -> ResumeAnalysis {
        self.analyze_resume(&profile.render()).await
    }

    #[instrument(skip(self, message), fields(chars = message.len()))]
    pub async fn chat(&self, message: &str) -> ChatReply {
        let key = self.cache_key(AnalysisOperation::Chat, &CacheKeyParams::new(message));

        self.cached(
            AnalysisOperation::Chat,
            &key,
            || Ok(analysis::respond(message)),
            || ChatReply {
                response: rules::CHAT_FAILURE_REPLY.to_string(),
                intent: Intent::Unknown,
                topic: None,
            },
        )
        .await
    }

    /// Classifies and tags `title。content`; summarizes the content alone
    pub async fn analyze_article(
        &self,
        title: Option<&str>,
        content: &str,
        summary_length: Option<usize>,
    ) -> ArticleAnalysis {
        let full_text = match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => format!("{}。{}", title, content),
            None => content.to_string(),
        };

        let (category, summary, tags) = tokio::join!(
            self.classify(&full_text),
            self.summarize(content, summary_length),
            self.generate_tags(&full_text),
        );

        ArticleAnalysis {
            category,
            summary,
            tags,
        }
    }

    /// Drops every cached result of one operation
    pub async fn invalidate(&self, operation: AnalysisOperation) -> Result<usize, DomainError> {
        let pattern = format!("{}:*", operation.key_prefix());
        let deleted = self.cache.delete_pattern(&pattern).await?;

        debug!(operation = %operation, deleted, "Invalidated cached analysis results");
        Ok(deleted)
    }

    /// Cache read, compute on miss, best-effort write
    async fn cached<T, F, D>(
        &self,
        operation: AnalysisOperation,
        key: &str,
        compute: F,
        fallback: D,
    ) -> T
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Result<T, DomainError>,
        D: FnOnce() -> T,
    {
        if self.config.cache_enabled {
            match self.cache.get::<T>(key).await {
                Ok(Some(value)) => {
                    debug!(operation = %operation, "Analysis cache hit");
                    record_cache_outcome(operation, CacheOutcome::Hit);
                    return value;
                }
                Ok(None) => {
                    debug!(operation = %operation, "Analysis cache miss");
                    record_cache_outcome(operation, CacheOutcome::Miss);
                }
                Err(e) => {
                    warn!(operation = %operation, error = %e, "Cache read failed, recomputing");
                    record_cache_outcome(operation, CacheOutcome::Error);
                }
            }
        }

        let value = match compute() {
            Ok(value) => value,
            Err(e) => {
                warn!(operation = %operation, error = %e, "Analysis failed, using fallback");
                record_fallback(operation);
                return fallback();
            }
        };

        if self.config.cache_enabled {
            let ttl = self.config.ttl_for(operation);
            if let Err(e) = self.cache.set(key, &value, ttl).await {
                warn!(operation = %operation, error = %e, "Cache write failed");
                record_cache_outcome(operation, CacheOutcome::Error);
            }
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::cache::MockCache;

    const NEWS: &str = "齐鲁国际学校开学典礼在校园体育馆举行，全校师生参加了活动";

    fn service_with(cache: Arc<MockCache>) -> AnalysisService {
        AnalysisService::new(cache)
    }

    #[tokio::test]
    async fn test_classify_populates_cache_with_ttl() {
        let cache = Arc::new(MockCache::new());
        let service = service_with(cache.clone());

        assert_eq!(service.classify(NEWS).await, "校园新闻");

        let key = service.cache_key(AnalysisOperation::Classify, &CacheKeyParams::new(NEWS));
        assert_eq!(cache.keys(), vec![key.clone()]);
        assert_eq!(cache.ttl_of(&key), Some(Duration::from_secs(7200)));
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let cache = Arc::new(MockCache::new());
        let service = service_with(cache.clone());

        let first = service.generate_tags(NEWS).await;
        let second = service.generate_tags(NEWS).await;

        assert_eq!(first, second);
        assert_eq!(cache.get_calls(), 2);
        assert_eq!(cache.set_calls(), 1);
    }

    #[tokio::test]
    async fn test_cached_value_wins_over_recomputation() {
        let probe = AnalysisService::new(Arc::new(MockCache::new()));
        let key = probe.cache_key(AnalysisOperation::Classify, &CacheKeyParams::new("anything"));

        let cache = Arc::new(MockCache::new().with_entry(&key, &"科技创新", None));
        let service = service_with(cache.clone());

        assert_eq!(service.classify("anything").await, "科技创新");
        assert_eq!(cache.set_calls(), 0);
    }

    #[tokio::test]
    async fn test_cache_failure_degrades_to_no_cache() {
        let cache = Arc::new(MockCache::new().with_error("connection refused"));
        let service = service_with(cache.clone());

        assert_eq!(service.classify(NEWS).await, "校园新闻");
        assert!(service.chat("学费多少钱？").await.response.contains("400-123-4567"));
        assert_eq!(service.summarize("", Some(10)).await, "");
        assert_eq!(cache.set_calls(), 3);
    }

    #[tokio::test]
    async fn test_summary_key_includes_length() {
        let cache = Arc::new(MockCache::new());
        let service = service_with(cache.clone());
        let content = "齐鲁国际学校举行开学典礼。全体学生参加了丰富多彩的校园活动。";

        service.summarize(content, Some(20)).await;
        service.summarize(content, Some(40)).await;
        service.summarize(content, None).await;

        let keys = cache.keys();
        assert_eq!(keys.len(), 3);
        assert!(keys.iter().all(|k| k.starts_with("summary:")));
        assert!(keys.iter().any(|k| k.ends_with(":100")));
    }

    #[tokio::test]
    async fn test_resume_failure_uses_fallback_and_skips_cache() {
        let cache = Arc::new(MockCache::new());
        let service = service_with(cache.clone());

        let analysis = service.analyze_resume("99999999999年工作经验").await;

        assert_eq!(analysis, ResumeAnalysis::fallback());
        assert_eq!(cache.set_calls(), 0);
    }

    #[tokio::test]
    async fn test_profile_scores_rendered_text() {
        let service = AnalysisService::new(Arc::new(MockCache::new()));
        let profile = ResumeProfile {
            applicant_name: "李老师".to_string(),
            position: "物理教师".to_string(),
            education: "本科".to_string(),
            experience: "1年经验".to_string(),
            skills: vec!["教学".to_string()],
        };

        let analysis = service.analyze_profile(&profile).await;
        assert_eq!(analysis.score, 6.8);
        assert_eq!(analysis.rationale, "具有本科学位；具有1年工作经验；掌握技能：教学");
    }

    #[tokio::test]
    async fn test_analyze_article() {
        let service = AnalysisService::new(Arc::new(MockCache::new()));

        let result = service
            .analyze_article(Some("开学典礼"), "全校师生齐聚体育馆，共同迎接新学期的到来。", Some(50))
            .await;

        assert_eq!(result.category, "校园新闻");
        assert!(!result.summary.contains("开学典礼"));
        assert!(result.summary.chars().count() <= 50);
        assert!(result.tags.len() <= 8);
    }

    #[tokio::test]
    async fn test_invalidate_one_operation() {
        let cache = Arc::new(MockCache::new());
        let service = service_with(cache.clone());

        service.classify(NEWS).await;
        service.generate_tags(NEWS).await;
        service.generate_tags("国际交流").await;

        assert_eq!(service.invalidate(AnalysisOperation::Tags).await.unwrap(), 2);
        assert_eq!(cache.keys().len(), 1);
        assert!(cache.keys()[0].starts_with("classify:"));
    }

    #[tokio::test]
    async fn test_disabled_cache_is_never_touched() {
        let cache = Arc::new(MockCache::new());
        let service = AnalysisService::with_config(
            cache.clone(),
            AnalysisServiceConfig::default().without_cache(),
        );

        service.classify(NEWS).await;
        assert_eq!(cache.get_calls(), 0);
        assert_eq!(cache.set_calls(), 0);
    }

    #[test]
    fn test_validation() {
        let service = AnalysisService::with_config(
            Arc::new(MockCache::new()),
            AnalysisServiceConfig::default().with_max_content_chars(5),
        );

        assert_eq!(service.resolve_summary_length(None).unwrap(), 100);
        assert_eq!(service.resolve_summary_length(Some(2000)).unwrap(), 2000);
        assert!(service.resolve_summary_length(Some(0)).is_err());
        assert!(service.resolve_summary_length(Some(2001)).is_err());

        assert!(service.validate_content("content", "一二三四五").is_ok());
        assert!(service.validate_content("content", "一二三四五六").is_err());
    }
}
