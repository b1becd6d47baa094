//! Cached analysis service

mod config;
mod service;

pub use config::AnalysisServiceConfig;
pub use service::{AnalysisService, ArticleAnalysis};
