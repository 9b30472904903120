//! Screening pipeline: keyword extraction once per job, one blocking task per
//! resume, then a deterministic ranking and status derivation.

use std::cmp::Ordering;
use std::sync::Arc;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::info;

use crate::analysis::{analyze_resume, extract_keywords};
use crate::errors::AppError;
use crate::models::job::JobDescriptionData;
use crate::models::resume::{Resume, ResumeStatus, ScoredResume};
use crate::models::stored::ScreeningStats;
use crate::screening::scorer::MatchScorer;

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutcome {
    pub keywords: Vec<String>,
    pub scored_resumes: Vec<ScoredResume>,
    pub stats: ScreeningStats,
}

/// Accepts a caller-supplied threshold only when it lies in 0–100.
pub fn validate_threshold(threshold: i64) -> Result<u32, AppError> {
    if (0..=100).contains(&threshold) {
        Ok(threshold as u32)
    } else {
        Err(AppError::Validation(format!(
            "threshold must be between 0 and 100, got {threshold}"
        )))
    }
}

/// Analyzes and scores one resume against already-extracted keywords.
pub fn score_single(
    resume: Resume,
    keywords: &[String],
    scorer: &dyn MatchScorer,
    threshold: u32,
) -> ScoredResume {
    let analysis = analyze_resume(&resume.content, keywords);
    let result = scorer.score(&analysis, keywords);
    ScoredResume {
        resume,
        score: result.percentage,
        matched_keywords: result.matched_keywords,
        analysis,
        status: ResumeStatus::from_score(result.percentage, threshold),
    }
}

/// Screens a batch of resumes against `job`.
///
/// Keywords are extracted once before fan-out and shared read-only. Output is
/// ranked by descending score; equal scores keep their input order.
pub async fn screen_batch(
    job: &JobDescriptionData,
    resumes: Vec<Resume>,
    threshold: u32,
    scorer: Arc<dyn MatchScorer>,
) -> Result<ScreeningOutcome, AppError> {
    let keywords: Arc<Vec<String>> = Arc::new(extract_keywords(&job.description));
    info!(
        job_title = %job.title,
        resumes = resumes.len(),
        keywords = keywords.len(),
        threshold,
        "Screening batch started"
    );

    let mut tasks = JoinSet::new();
    for (index, resume) in resumes.into_iter().enumerate() {
        let keywords = Arc::clone(&keywords);
        let scorer = Arc::clone(&scorer);
        tasks.spawn_blocking(move || {
            (index, score_single(resume, &keywords, scorer.as_ref(), threshold))
        });
    }

    let mut indexed = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let pair = joined.map_err(|e| anyhow!("resume scoring task failed: {e}"))?;
        indexed.push(pair);
    }

    let scored_resumes = rank(indexed);
    let stats = ScreeningStats::from_scored(&scored_resumes);
    info!(
        total = stats.total,
        qualified = stats.qualified,
        average_score = stats.average_score,
        "Screening batch finished"
    );

    let keywords = Arc::try_unwrap(keywords).unwrap_or_else(|shared| (*shared).clone());
    Ok(ScreeningOutcome {
        keywords,
        scored_resumes,
        stats,
    })
}

/// Descending score, input position as the tie-break.
fn rank(mut indexed: Vec<(usize, ScoredResume)>) -> Vec<ScoredResume> {
    indexed.sort_by(|(ia, a), (ib, b)| b.score.cmp(&a.score).then(ia.cmp(ib)));
    indexed.into_iter().map(|(_, scored)| scored).collect()
}

/// Re-derives status for `threshold`. Scores, keywords and order are kept.
pub fn apply_threshold(scored: &[ScoredResume], threshold: u32) -> Vec<ScoredResume> {
    scored.iter().map(|r| r.with_threshold(threshold)).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Result views
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Qualified,
    Rejected,
}

impl StatusFilter {
    fn accepts(&self, status: ResumeStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Qualified => status == ResumeStatus::Qualified,
            StatusFilter::Rejected => status == ResumeStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Score,
    Filename,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ResultView {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub sort: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Filters by status, then stable-sorts by the chosen field and direction.
pub fn apply_view(scored: &[ScoredResume], view: &ResultView) -> Vec<ScoredResume> {
    let mut visible: Vec<ScoredResume> = scored
        .iter()
        .filter(|r| view.status.accepts(r.status))
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        let ordering = match view.sort {
            SortField::Score => a.score.cmp(&b.score),
            SortField::Filename => compare_filenames(&a.resume.filename, &b.resume.filename),
        };
        match view.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    visible
}

fn compare_filenames(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::ResumeAnalysis;
    use crate::screening::scorer::WeightedKeywordScorer;

    fn job(description: &str) -> JobDescriptionData {
        JobDescriptionData {
            title: "Backend Engineer".to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn scored(filename: &str, score: u32, threshold: u32) -> ScoredResume {
        ScoredResume {
            resume: Resume::new(filename, "text"),
            score,
            matched_keywords: vec![],
            analysis: ResumeAnalysis::default(),
            status: ResumeStatus::from_score(score, threshold),
        }
    }

    #[test]
    fn test_validate_threshold_bounds() {
        assert_eq!(validate_threshold(0).unwrap(), 0);
        assert_eq!(validate_threshold(100).unwrap(), 100);
        assert!(matches!(validate_threshold(101), Err(AppError::Validation(_))));
        assert!(matches!(validate_threshold(-1), Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_screen_batch_ranks_by_descending_score() {
        let resumes = vec![
            Resume::new("weak.txt", "Hello there"),
            Resume::new(
                "strong.txt",
                "Jane Doe\njane@example.com\n\nSkills: Python, Docker, SQL\n\nExperience\nPython and Docker at Acme\n\nEducation\nBSc Computer Science",
            ),
            Resume::new("middle.txt", "Sam Roe\nsam@example.com\nSkills: Python"),
        ];
        let outcome = screen_batch(
            &job("We need Python, Docker and SQL skills."),
            resumes,
            60,
            Arc::new(WeightedKeywordScorer::default()),
        )
        .await
        .unwrap();

        assert_eq!(outcome.scored_resumes.len(), 3);
        assert_eq!(outcome.scored_resumes[0].resume.filename, "strong.txt");
        assert_eq!(outcome.scored_resumes[2].resume.filename, "weak.txt");
        let scores: Vec<u32> = outcome.scored_resumes.iter().map(|r| r.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(outcome.stats.total, 3);
    }

    #[tokio::test]
    async fn test_screen_batch_ties_keep_input_order() {
        let resumes: Vec<Resume> = (1..=6)
            .map(|i| Resume::manual_entry(i, "identical text"))
            .collect();
        let outcome = screen_batch(
            &job("Rust"),
            resumes,
            50,
            Arc::new(WeightedKeywordScorer::default()),
        )
        .await
        .unwrap();

        let names: Vec<&str> = outcome
            .scored_resumes
            .iter()
            .map(|r| r.resume.filename.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Manual Entry 1",
                "Manual Entry 2",
                "Manual Entry 3",
                "Manual Entry 4",
                "Manual Entry 5",
                "Manual Entry 6"
            ]
        );
    }

    #[tokio::test]
    async fn test_screen_batch_empty_input() {
        let outcome = screen_batch(
            &job("Rust"),
            Vec::new(),
            60,
            Arc::new(WeightedKeywordScorer::default()),
        )
        .await
        .unwrap();
        assert!(outcome.scored_resumes.is_empty());
        assert_eq!(outcome.stats, ScreeningStats::default());
    }

    #[test]
    fn test_raising_threshold_only_rejects() {
        let batch = vec![scored("a", 90, 50), scored("b", 60, 50), scored("c", 40, 50)];
        let raised = apply_threshold(&batch, 70);

        for (before, after) in batch.iter().zip(&raised) {
            assert_eq!(before.score, after.score);
            assert_eq!(before.matched_keywords, after.matched_keywords);
            if before.status == ResumeStatus::Rejected {
                assert_eq!(after.status, ResumeStatus::Rejected);
            }
        }
        assert_eq!(raised[1].status, ResumeStatus::Rejected);
    }

    #[test]
    fn test_apply_threshold_is_idempotent() {
        let batch = vec![scored("a", 75, 60), scored("b", 10, 60)];
        let once = apply_threshold(&batch, 30);
        let twice = apply_threshold(&once, 30);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_view_filters_by_status() {
        let batch = vec![scored("a", 90, 60), scored("b", 20, 60), scored("c", 70, 60)];
        let view = ResultView {
            status: StatusFilter::Rejected,
            ..Default::default()
        };
        let visible = apply_view(&batch, &view);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].resume.filename, "b");
    }

    #[test]
    fn test_view_sorts_filenames_case_insensitively() {
        let batch = vec![scored("beta.txt", 1, 0), scored("Alpha.txt", 2, 0), scored("gamma.txt", 3, 0)];
        let view = ResultView {
            sort: SortField::Filename,
            direction: SortDirection::Asc,
            ..Default::default()
        };
        let names: Vec<String> = apply_view(&batch, &view)
            .into_iter()
            .map(|r| r.resume.filename)
            .collect();
        assert_eq!(names, vec!["Alpha.txt", "beta.txt", "gamma.txt"]);
    }

    #[test]
    fn test_view_defaults_to_score_descending() {
        let batch = vec![scored("a", 10, 0), scored("b", 80, 0), scored("c", 45, 0)];
        let scores: Vec<u32> = apply_view(&batch, &ResultView::default())
            .iter()
            .map(|r| r.score)
            .collect();
        assert_eq!(scores, vec![80, 45, 10]);
    }
}
