use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResponse, Json, ResumeData, ResumeRequest};

use super::check_length;

/// Scores résumé text or a structured applicant profile
pub async fn analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<ApiResponse<ResumeData>>, ApiError> {
    let analysis = match (&request.resume_text, &request.profile) {
        (Some(text), None) => {
            check_length(&state, "resume_text", text)?;
            state.analysis.analyze_resume(text).await
        }
        (None, Some(profile)) => {
            check_length(&state, "profile", &profile.render())?;
            state.analysis.analyze_profile(profile).await
        }
        _ => {
            return Err(ApiError::bad_request(
                "Exactly one of 'resume_text' or 'profile' is required",
            ));
        }
    };

    debug!(score = analysis.score, "Resume scored");
    Ok(Json(ApiResponse::ok("AI分析完成", ResumeData::from(analysis))))
}
