//! HTTP request, response and error types

pub mod analysis;
pub mod error;
pub mod json;

pub use analysis::{
    AnalyzeArticleRequest, ApiResponse, ChatRequest, ClassifyData, ContentRequest, ResumeData,
    ResumeRequest, SummarizeRequest, SummaryData, TagsData,
};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
