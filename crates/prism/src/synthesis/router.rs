use axum::extract::Path;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Local;
use serde_json::Value;

use super::briefing::BriefingNote;
use super::domain::AnalysisResult;
use super::report::SynthesizedReport;
use crate::error::AppError;

/// Router exposing report synthesis for completed analysis payloads.
pub fn report_router() -> Router {
    Router::new()
        .route("/api/v1/reports", post(report_handler))
        .route("/api/v1/reports/:job_id/briefing", post(briefing_handler))
}

pub(crate) async fn report_handler(
    Json(payload): Json<Value>,
) -> Result<Json<SynthesizedReport>, AppError> {
    let result = AnalysisResult::from_value(payload)?;
    Ok(Json(result.synthesize()))
}

pub(crate) async fn briefing_handler(
    Path(job_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<BriefingNote>, AppError> {
    let result = AnalysisResult::from_value(payload)?;
    let report = result.synthesize();
    let today = Local::now().date_naive();
    Ok(Json(BriefingNote::from_report(&report, &job_id, today)))
}
