//! Axum route handler for ATS scoring.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ats::{compute_ats_score, AtsScoreResult};
use crate::errors::AppError;
use crate::models::ResumeData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScoreRequest {
    pub resume_data: Option<ResumeData>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScoreResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: AtsScoreResult,
    pub analyzed_at: DateTime<Utc>,
}

/// POST /api/v1/ats-score
///
/// Quick structural analysis, or keyword matching as well when a job
/// description of at least 50 characters is supplied.
pub async fn handle_ats_score(
    State(state): State<AppState>,
    Json(request): Json<AtsScoreRequest>,
) -> Result<Json<AtsScoreResponse>, AppError> {
    let resume = request
        .resume_data
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;

    let result = compute_ats_score(&resume, request.job_description.as_deref());

    tracing::info!(
        score = result.score,
        with_job_description = result.keywords.is_some(),
        "ATS score complete"
    );

    Ok(Json(AtsScoreResponse {
        success: true,
        result,
        analyzed_at: state.clock.now(),
    }))
}
