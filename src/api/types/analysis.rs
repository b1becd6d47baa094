//! Request and response bodies of the `/api/ai` routes

use serde::{Deserialize, Serialize};

use crate::domain::{ResumeAnalysis, ResumeProfile};

/// Success envelope shared by every analysis route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub content: String,
    #[serde(default)]
    pub max_length: Option<usize>,
}

/// Either free résumé text or the structured profile, never both
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub profile: Option<ResumeProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub summary_length: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyData {
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryData {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsData {
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeData {
    pub score: f64,
    pub analysis: String,
}

impl From<ResumeAnalysis> for ResumeData {
    fn from(analysis: ResumeAnalysis) -> Self {
        Self {
            score: analysis.score,
            analysis: analysis.rationale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let body = ApiResponse::ok("标签生成成功", TagsData { tags: vec!["学校".to_string()] });
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "标签生成成功");
        assert_eq!(json["data"]["tags"][0], "学校");
    }

    #[test]
    fn test_resume_request_accepts_profile() {
        let request: ResumeRequest = serde_json::from_str(
            r#"{"profile":{"applicant_name":"张老师","education":"硕士","skills":["教学"]}}"#,
        )
        .unwrap();

        assert!(request.resume_text.is_none());
        let profile = request.profile.unwrap();
        assert_eq!(profile.education, "硕士");
        assert_eq!(profile.position, "");
    }

    #[test]
    fn test_resume_data_renames_rationale() {
        let data = ResumeData::from(ResumeAnalysis {
            score: 6.0,
            rationale: "具有本科学位".to_string(),
        });
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["score"], 6.0);
        assert_eq!(json["analysis"], "具有本科学位");
    }
}
