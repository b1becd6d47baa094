// HTTP API tests driving the full router
//
// Tests cover:
// - The /api/ai routes and their response envelope
// - Request validation errors

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use campus_insight::api::{AppState, create_router};
use campus_insight::infrastructure::analysis::{AnalysisService, AnalysisServiceConfig};
use campus_insight::infrastructure::cache::InMemoryCache;

fn app() -> Router {
    app_with_config(AnalysisServiceConfig::default())
}

fn app_with_config(config: AnalysisServiceConfig) -> Router {
    let service = AnalysisService::with_config(Arc::new(InMemoryCache::new()), config);
    create_router(AppState::new(Arc::new(service)), None)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ============ Analysis routes ============

#[tokio::test]
async fn test_summarize() {
    let (status, body) = post_json(
        app(),
        "/api/ai/summarize",
        json!({
            "content": "齐鲁国际学校举行新学期开学典礼。全体师生齐聚体育馆。校长在典礼上致辞，勉励同学们努力学习。",
            "max_length": 30
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "摘要生成成功");
    let summary = body["data"]["summary"].as_str().unwrap();
    assert!(!summary.is_empty());
    assert!(summary.chars().count() <= 30);
}

#[tokio::test]
async fn test_tags() {
    let (status, body) = post_json(
        app(),
        "/api/ai/tags",
        json!({ "content": "学校与海外姐妹学校开展国际交流活动，学生们积极参与。" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "标签生成成功");
    let tags = body["data"]["tags"].as_array().unwrap();
    assert!(!tags.is_empty());
    assert!(tags.len() <= 8);
}

#[tokio::test]
async fn test_resume_text() {
    let (status, body) = post_json(
        app(),
        "/api/ai/resume",
        json!({ "resume_text": "学历：硕士\n工作经验：5年教学经验\n技能：数学教学、班级管理" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "AI分析完成");
    assert_eq!(body["data"]["score"], 8.6);
    assert_eq!(
        body["data"]["analysis"],
        "具有硕士学位，教育背景良好；具有5年丰富工作经验；掌握技能：教学、管理"
    );
}

#[tokio::test]
async fn test_resume_profile() {
    let (status, body) = post_json(
        app(),
        "/api/ai/resume",
        json!({
            "profile": {
                "applicant_name": "王博士",
                "position": "物理教师",
                "education": "博士",
                "experience": "10年教学经验",
                "skills": ["物理教学", "英语"]
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["score"], 9.1);
}

#[tokio::test]
async fn test_analyze_article() {
    let (status, body) = post_json(
        app(),
        "/api/ai/analyze",
        json!({
            "title": "招生简章发布",
            "content": "2025年秋季招生报名正式开始，欢迎申请。",
            "summary_length": 20
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "文章分析完成");
    assert_eq!(body["data"]["category"], "招生信息");
    assert!(body["data"]["summary"].as_str().unwrap().chars().count() <= 20);
}

#[tokio::test]
async fn test_chat_without_topic_omits_field() {
    let (status, body) = post_json(app(), "/api/ai/chat", json!({ "message": "谢谢" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["intent"], "thanks");
    assert!(body["data"].get("topic").is_none());
    assert!(body["data"]["response"].as_str().unwrap().contains("400-123-4567"));
}

// ============ Validation ============

#[tokio::test]
async fn test_oversized_content_is_rejected() {
    let app = app_with_config(AnalysisServiceConfig::default().with_max_content_chars(10));
    let (status, body) = post_json(
        app,
        "/api/ai/classify",
        json!({ "content": "这是一段超过十个字符长度限制的内容" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
    assert_eq!(body["error"]["param"], "content");
}

#[tokio::test]
async fn test_summary_length_above_maximum() {
    let (status, body) = post_json(
        app(),
        "/api/ai/analyze",
        json!({ "content": "学校新闻。", "summary_length": 2001 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["param"], "summary_length");
}

#[tokio::test]
async fn test_missing_field() {
    let (status, body) = post_json(app(), "/api/ai/chat", json!({ "text": "你好" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "json_parse_error");
}
