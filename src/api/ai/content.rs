//! Article classification, summarization and tagging

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    AnalyzeArticleRequest, ApiError, ApiResponse, ClassifyData, ContentRequest, Json,
    SummarizeRequest, SummaryData, TagsData,
};
use crate::infrastructure::analysis::ArticleAnalysis;

use super::check_length;

pub async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Result<Json<ApiResponse<ClassifyData>>, ApiError> {
    check_length(&state, "content", &request.content)?;

    let category = state.analysis.classify(&request.content).await;
    debug!(category = %category, "Content classified");

    Ok(Json(ApiResponse::ok("内容分类成功", ClassifyData { category })))
}

pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<ApiResponse<SummaryData>>, ApiError> {
    check_length(&state, "content", &request.content)?;
    let max_length = state
        .analysis
        .resolve_summary_length(request.max_length)
        .map_err(|e| ApiError::from(e).with_param("max_length"))?;

    let summary = state
        .analysis
        .summarize(&request.content, Some(max_length))
        .await;

    Ok(Json(ApiResponse::ok("摘要生成成功", SummaryData { summary })))
}

pub async fn tags(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Result<Json<ApiResponse<TagsData>>, ApiError> {
    check_length(&state, "content", &request.content)?;

    let tags = state.analysis.generate_tags(&request.content).await;

    Ok(Json(ApiResponse::ok("标签生成成功", TagsData { tags })))
}

/// Category, summary and tags of one article in a single call
pub async fn analyze_article(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeArticleRequest>,
) -> Result<Json<ApiResponse<ArticleAnalysis>>, ApiError> {
    check_length(&state, "content", &request.content)?;
    if let Some(title) = &request.title {
        check_length(&state, "title", title)?;
    }
    let summary_length = state
        .analysis
        .resolve_summary_length(request.summary_length)
        .map_err(|e| ApiError::from(e).with_param("summary_length"))?;

    let analysis = state
        .analysis
        .analyze_article(
            request.title.as_deref(),
            &request.content,
            Some(summary_length),
        )
        .await;

    Ok(Json(ApiResponse::ok("文章分析完成", analysis)))
}
