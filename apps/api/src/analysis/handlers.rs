//! Axum route handler for the resume analysis API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_resume_with_clock, AnalysisResult};
use crate::errors::AppError;
use crate::models::ResumeData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_data: Option<ResumeData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
}

/// POST /api/v1/resume/analyze
///
/// Runs the full analysis over the submitted resume. The analysis is
/// synchronous and completes in well under a millisecond, so it runs inline.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let resume = request
        .resume_data
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;

    let analysis = analyze_resume_with_clock(&resume, state.clock.as_ref());

    tracing::info!(
        role = %analysis.detected_role,
        completeness = analysis.completeness_score,
        priorities = analysis.enhancement_priorities.len(),
        "Resume analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
        analyzed_at: state.clock.now(),
    }))
}
