//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::jd::extract_jd_info;
use crate::matching::report::{build_report, MatchReport};
use crate::matching::resume::extract_resume_data;
use crate::state::AppState;

/// Minimum trimmed JD length accepted by /analyze.
const MIN_JD_CHARS: usize = 50;
/// Minimum trimmed resume length accepted by /analyze.
const MIN_RESUME_CHARS: usize = 30;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub jd_text: String,
    pub resume_text: String,
}

/// POST /analyze
///
/// Runs the full pipeline: extract JD fields, extract resume fields, score,
/// template advice, assemble the report. Stateless; nothing is stored.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<MatchReport>, AppError> {
    if request.jd_text.trim().chars().count() < MIN_JD_CHARS {
        return Err(AppError::Validation(
            "JD内容过短，请提供完整的岗位描述（至少50个字符）".to_string(),
        ));
    }
    if request.resume_text.trim().chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::Validation(
            "简历内容过短，请提供完整的简历信息（至少30个字符）".to_string(),
        ));
    }

    let jd = extract_jd_info(&request.jd_text, &state.vocabulary);
    let resume = extract_resume_data(&request.resume_text, &state.vocabulary);

    let breakdown = state
        .scorer
        .score(&request.jd_text, &jd, &resume)
        .await?;

    let report = build_report(&request.jd_text, &jd, breakdown);
    info!(
        report_id = %report.report_id,
        score = report.match_score,
        "analysis complete"
    );

    Ok(Json(report))
}
