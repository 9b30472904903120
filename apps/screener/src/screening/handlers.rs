use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::analysis::{analyze_resume, extract_keywords};
use crate::errors::AppError;
use crate::models::analysis::{ResumeAnalysis, ScoreResult};
use crate::models::job::JobDescriptionData;
use crate::models::resume::{Resume, ScoredResume};
use crate::models::stored::{ScreeningStats, StoredScreeningResult};
use crate::screening::pipeline::{apply_threshold, screen_batch, validate_threshold};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Keywords and single-resume analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct KeywordsRequest {
    pub description: String,
}

#[derive(Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

/// POST /api/v1/keywords
pub async fn handle_extract_keywords(
    Json(req): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    Ok(Json(KeywordsResponse {
        keywords: extract_keywords(&req.description),
    }))
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub keywords: Vec<String>,
    pub analysis: ResumeAnalysis,
    pub score: ScoreResult,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let keywords = extract_keywords(&req.description);
    let analysis = analyze_resume(&req.content, &keywords);
    let score = state.scorer.score(&analysis, &keywords);
    Ok(Json(AnalyzeResponse {
        keywords,
        analysis,
        score,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Intake
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/upload
///
/// Every file part becomes one resume; bytes are decoded as lossy UTF-8.
/// Non-file parts are skipped.
pub async fn handle_upload_resumes(
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Vec<Resume>>), AppError> {
    let mut resumes = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read {filename}: {e}")))?;
        let content = String::from_utf8_lossy(&data).into_owned();
        if content.trim().is_empty() {
            return Err(AppError::Validation(format!("{filename} is empty")));
        }
        resumes.push(Resume::new(filename, content));
    }

    if resumes.is_empty() {
        return Err(AppError::Validation("No resume files in upload".to_string()));
    }

    info!("Accepted {} uploaded resumes", resumes.len());
    Ok((StatusCode::CREATED, Json(resumes)))
}

// ────────────────────────────────────────────────────────────────────────────
// Screening runs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResumeInput {
    #[serde(default)]
    pub filename: Option<String>,
    pub content: String,
}

#[derive(Deserialize)]
pub struct ScreeningRequest {
    pub job: JobDescriptionData,
    pub resumes: Vec<ResumeInput>,
    #[serde(default)]
    pub threshold: Option<i64>,
}

#[derive(Serialize)]
pub struct ScreeningResponse {
    /// Id of the saved result; `None` when saving failed.
    pub result_id: Option<Uuid>,
    pub keywords: Vec<String>,
    pub stats: ScreeningStats,
    pub scored_resumes: Vec<ScoredResume>,
}

/// POST /api/v1/screenings
///
/// Screens the batch, then saves it. A failed save is logged and reported as
/// a null `result_id`; the screening itself is still returned.
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(req): Json<ScreeningRequest>,
) -> Result<Json<ScreeningResponse>, AppError> {
    req.job.validate()?;
    if req.resumes.is_empty() {
        return Err(AppError::Validation("at least one resume is required".to_string()));
    }
    let threshold = match req.threshold {
        Some(t) => validate_threshold(t)?,
        None => state.config.score_threshold,
    };

    let resumes: Vec<Resume> = req
        .resumes
        .into_iter()
        .enumerate()
        .map(|(i, input)| match input.filename {
            Some(name) if !name.trim().is_empty() => Resume::new(name, input.content),
            _ => Resume::manual_entry(i + 1, input.content),
        })
        .collect();

    let outcome = screen_batch(&req.job, resumes, threshold, state.scorer.clone()).await?;

    let stored = StoredScreeningResult::new(&req.job, outcome.scored_resumes.clone(), threshold);
    let result_id = stored.id;
    let result_id = match state.results.upsert(stored).await {
        Ok(()) => Some(result_id),
        Err(e) => {
            error!("Failed to save screening result: {e}");
            None
        }
    };

    Ok(Json(ScreeningResponse {
        result_id,
        keywords: outcome.keywords,
        stats: outcome.stats,
        scored_resumes: outcome.scored_resumes,
    }))
}

#[derive(Deserialize)]
pub struct ThresholdRequest {
    pub scored_resumes: Vec<ScoredResume>,
    pub threshold: i64,
}

#[derive(Serialize)]
pub struct ThresholdResponse {
    pub stats: ScreeningStats,
    pub scored_resumes: Vec<ScoredResume>,
}

/// POST /api/v1/screenings/threshold
pub async fn handle_rethreshold(
    Json(req): Json<ThresholdRequest>,
) -> Result<Json<ThresholdResponse>, AppError> {
    let threshold = validate_threshold(req.threshold)?;
    let scored_resumes = apply_threshold(&req.scored_resumes, threshold);
    Ok(Json(ThresholdResponse {
        stats: ScreeningStats::from_scored(&scored_resumes),
        scored_resumes,
    }))
}
