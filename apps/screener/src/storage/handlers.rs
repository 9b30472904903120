use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{export_csv, export_filename};
use crate::models::resume::ScoredResume;
use crate::models::stored::StoredScreeningResult;
use crate::screening::pipeline::{apply_view, validate_threshold, ResultView};
use crate::state::AppState;
use crate::storage::{usage, ResultsQuery, StorageUsage};

async fn load(state: &AppState, id: Uuid) -> Result<StoredScreeningResult, AppError> {
    state
        .results
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Screening result {id} not found")))
}

/// GET /api/v1/results
pub async fn handle_list_results(
    State(state): State<AppState>,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<Vec<StoredScreeningResult>>, AppError> {
    let results = state.results.list().await?;
    Ok(Json(query.apply(results)))
}

#[derive(Serialize)]
pub struct ClearResponse {
    pub deleted: u64,
}

/// DELETE /api/v1/results
pub async fn handle_clear_results(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>, AppError> {
    let deleted = state.results.clear().await?;
    Ok(Json(ClearResponse { deleted }))
}

/// GET /api/v1/results/usage
pub async fn handle_results_usage(
    State(state): State<AppState>,
) -> Result<Json<StorageUsage>, AppError> {
    Ok(Json(usage(state.results.as_ref()).await?))
}

/// GET /api/v1/results/:id
pub async fn handle_get_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredScreeningResult>, AppError> {
    Ok(Json(load(&state, id).await?))
}

/// DELETE /api/v1/results/:id
pub async fn handle_delete_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.results.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Screening result {id} not found")))
    }
}

/// GET /api/v1/results/:id/candidates
pub async fn handle_result_candidates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(view): Query<ResultView>,
) -> Result<Json<Vec<ScoredResume>>, AppError> {
    let stored = load(&state, id).await?;
    Ok(Json(apply_view(&stored.scored_resumes, &view)))
}

#[derive(Deserialize)]
pub struct ThresholdUpdate {
    pub threshold: i64,
}

/// PATCH /api/v1/results/:id/threshold
///
/// Re-derives statuses only; scores and matched keywords are kept.
pub async fn handle_update_threshold(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ThresholdUpdate>,
) -> Result<Json<StoredScreeningResult>, AppError> {
    let threshold = validate_threshold(req.threshold)?;
    let updated = load(&state, id).await?.rethreshold(threshold);
    state.results.upsert(updated.clone()).await?;
    Ok(Json(updated))
}

/// GET /api/v1/results/:id/export
pub async fn handle_export_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let stored = load(&state, id).await?;
    let now = Utc::now();
    let body = export_csv(&stored.scored_resumes, Some(&stored.job_description), now)?;
    let disposition = format!("attachment; filename=\"{}\"", export_filename(now));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
