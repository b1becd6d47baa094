//! Domain layer - analyzers, cache abstraction and errors

pub mod analysis;
pub mod cache;
pub mod error;

pub use analysis::{AnalysisOperation, ChatReply, Intent, ResumeAnalysis, ResumeProfile};
pub use cache::{Cache, CacheExt, CacheKeyGenerator, CacheKeyParams, DigestKeyGenerator};
pub use error::DomainError;
