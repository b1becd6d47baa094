//! Heuristic text analysis
//!
//! Pure, synchronous analyzers over static rule tables. Caching and
//! fallbacks live in `infrastructure::analysis`.

mod chat;
mod classifier;
pub mod rules;
mod resume;
mod sentence;
mod summarizer;
mod tagger;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use chat::{ChatReply, Intent, chat, detect_intent, match_topic, respond};
pub use classifier::{category_score, classify};
pub use resume::{
    FALLBACK_RATIONALE, ResumeAnalysis, ResumeProfile, analyze_resume, try_analyze_resume,
};
pub use sentence::{
    MIN_SENTENCE_CHARS, ScoredSentence, normalize, score_sentence, score_sentences, segment,
};
pub use summarizer::summarize;
pub use tagger::{MAX_TAGS, extract_proper_nouns, generate_tags};

/// Analysis operations, each with its own cache key prefix and TTL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisOperation {
    Classify,
    Summarize,
    Tags,
    Resume,
    Chat,
}

impl AnalysisOperation {
    pub const ALL: [AnalysisOperation; 5] = [
        Self::Classify,
        Self::Summarize,
        Self::Tags,
        Self::Resume,
        Self::Chat,
    ];

    /// Cache key prefix
    pub fn key_prefix(&self) -> &'static str {
        match self {
            Self::Classify => "classify",
            Self::Summarize => "summary",
            Self::Tags => "tags",
            Self::Resume => "resume",
            Self::Chat => "chat",
        }
    }

    /// Metric label and CLI name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classify => "classify",
            Self::Summarize => "summarize",
            Self::Tags => "tags",
            Self::Resume => "resume",
            Self::Chat => "chat",
        }
    }
}

impl fmt::Display for AnalysisOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnalysisOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classify" => Ok(Self::Classify),
            "summarize" | "summary" => Ok(Self::Summarize),
            "tags" => Ok(Self::Tags),
            "resume" => Ok(Self::Resume),
            "chat" => Ok(Self::Chat),
            _ => Err(format!("Unknown analysis operation: {}", s)),
        }
    }
}
