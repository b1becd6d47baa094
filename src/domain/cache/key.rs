//! Cache key generation

use std::collections::BTreeMap;
use std::fmt::Debug;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// Trait for generating cache keys from input data
pub trait CacheKeyGenerator: Send + Sync + Debug {
    /// Generates a cache key from the given components
    fn generate(&self, params: &CacheKeyParams) -> String;

    /// Generates a key with a namespace prefix
    fn generate_with_namespace(&self, namespace: &str, params: &CacheKeyParams) -> String {
        format!("{}:{}", namespace, self.generate(params))
    }
}

/// Parameters for cache key generation
#[derive(Debug, Clone, Default)]
pub struct CacheKeyParams {
    /// Full analyzed input
    pub input: String,
    /// Parameters appended after the digest (sorted by name)
    pub components: BTreeMap<String, String>,
}

impl CacheKeyParams {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            components: BTreeMap::new(),
        }
    }

    /// Adds a parameter that distinguishes otherwise identical inputs
    pub fn with_component(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.components.insert(key.into(), value.into());
        self
    }
}

/// Key generator hashing the whole input with SHA-256
///
/// Produces `<base64url(sha256(input))>[:<component value>...]`, so two inputs
/// sharing a long prefix never land on the same key.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestKeyGenerator;

impl DigestKeyGenerator {
    pub fn new() -> Self {
        Self
    }

    fn digest(input: &str) -> String {
        URL_SAFE_NO_PAD.encode(Sha256::digest(input.as_bytes()))
    }
}

impl CacheKeyGenerator for DigestKeyGenerator {
    fn generate(&self, params: &CacheKeyParams) -> String {
        let mut parts = vec![Self::digest(&params.input)];
        parts.extend(params.components.values().cloned());
        parts.join(":")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_params_with_components() {
        let params = CacheKeyParams::new("齐鲁国际学校").with_component("max_length", "100");

        assert_eq!(params.input, "齐鲁国际学校");
        assert_eq!(params.components.get("max_length"), Some(&"100".to_string()));
    }

    #[test]
    fn test_digest_is_deterministic() {
        let generator = DigestKeyGenerator::new();
        let a = generator.generate(&CacheKeyParams::new("开学典礼"));
        let b = generator.generate(&CacheKeyParams::new("开学典礼"));

        assert_eq!(a, b);
        // 32 bytes in unpadded base64url
        assert_eq!(a.len(), 43);
        assert!(!a.contains('+') && !a.contains('/') && !a.contains('='));
    }

    #[test]
    fn test_shared_prefix_does_not_collide() {
        let generator = DigestKeyGenerator::new();
        let prefix = "学".repeat(300);
        let a = generator.generate(&CacheKeyParams::new(format!("{}甲", prefix)));
        let b = generator.generate(&CacheKeyParams::new(format!("{}乙", prefix)));

        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_with_namespace_and_component() {
        let generator = DigestKeyGenerator::new();
        let params = CacheKeyParams::new("content").with_component("max_length", "80");

        let key = generator.generate_with_namespace("summary", &params);
        assert!(key.starts_with("summary:"));
        assert!(key.ends_with(":80"));
        assert_eq!(key.split(':').count(), 3);
    }

    #[test]
    fn test_components_are_sorted() {
        let generator = DigestKeyGenerator::new();
        let params = CacheKeyParams::new("x")
            .with_component("zebra", "z")
            .with_component("apple", "a");

        let key = generator.generate(&params);
        assert!(key.ends_with(":a:z"));
    }
}
