use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job::JobDescriptionData;
use crate::models::resume::{ResumeStatus, ScoredResume};

/// Aggregate figures for one screening run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningStats {
    pub total: usize,
    pub qualified: usize,
    pub rejected: usize,
    pub average_score: u32,
    pub qualification_rate: u32,
}

impl ScreeningStats {
    pub fn from_scored(scored: &[ScoredResume]) -> Self {
        let total = scored.len();
        if total == 0 {
            return Self::default();
        }
        let qualified = scored
            .iter()
            .filter(|r| r.status == ResumeStatus::Qualified)
            .count();
        let score_sum: u64 = scored.iter().map(|r| u64::from(r.score)).sum();

        Self {
            total,
            qualified,
            rejected: total - qualified,
            average_score: (score_sum as f64 / total as f64).round() as u32,
            qualification_rate: ((qualified as f64 / total as f64) * 100.0).round() as u32,
        }
    }
}

/// A saved screening run, as kept by the results repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredScreeningResult {
    pub id: Uuid,
    pub job_title: String,
    pub company: String,
    pub created_at: DateTime<Utc>,
    pub total_candidates: usize,
    pub qualified_candidates: usize,
    pub average_score: u32,
    pub threshold: u32,
    pub scored_resumes: Vec<ScoredResume>,
    pub job_description: JobDescriptionData,
}

impl StoredScreeningResult {
    pub fn new(
        job: &JobDescriptionData,
        scored_resumes: Vec<ScoredResume>,
        threshold: u32,
    ) -> Self {
        let stats = ScreeningStats::from_scored(&scored_resumes);
        Self {
            id: Uuid::new_v4(),
            job_title: job.title.clone(),
            company: job.company_or_default(),
            created_at: Utc::now(),
            total_candidates: stats.total,
            qualified_candidates: stats.qualified,
            average_score: stats.average_score,
            threshold,
            scored_resumes,
            job_description: job.clone(),
        }
    }

    /// Re-derives every status for `threshold`; scores and keywords are untouched.
    pub fn rethreshold(&self, threshold: u32) -> Self {
        let scored_resumes: Vec<ScoredResume> = self
            .scored_resumes
            .iter()
            .map(|r| r.with_threshold(threshold))
            .collect();
        let stats = ScreeningStats::from_scored(&scored_resumes);
        Self {
            threshold,
            qualified_candidates: stats.qualified,
            scored_resumes,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::ResumeAnalysis;
    use crate::models::resume::Resume;

    fn scored(filename: &str, score: u32, threshold: u32) -> ScoredResume {
        ScoredResume {
            resume: Resume::new(filename, "text"),
            score,
            matched_keywords: vec!["Rust".to_string()],
            analysis: ResumeAnalysis::default(),
            status: ResumeStatus::from_score(score, threshold),
        }
    }

    fn job() -> JobDescriptionData {
        JobDescriptionData {
            title: "Platform Engineer".to_string(),
            description: "Rust".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_stats_empty_batch() {
        assert_eq!(ScreeningStats::from_scored(&[]), ScreeningStats::default());
    }

    #[test]
    fn test_stats_average_and_rate() {
        let batch = vec![scored("a", 80, 60), scored("b", 55, 60), scored("c", 61, 60)];
        let stats = ScreeningStats::from_scored(&batch);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.qualified, 2);
        assert_eq!(stats.rejected, 1);
        // (80 + 55 + 61) / 3 = 65.33
        assert_eq!(stats.average_score, 65);
        assert_eq!(stats.qualification_rate, 67);
    }

    #[test]
    fn test_new_fills_summary_fields() {
        let stored = StoredScreeningResult::new(&job(), vec![scored("a", 70, 60)], 60);
        assert_eq!(stored.job_title, "Platform Engineer");
        assert_eq!(stored.company, "Unknown Company");
        assert_eq!(stored.total_candidates, 1);
        assert_eq!(stored.qualified_candidates, 1);
        assert_eq!(stored.average_score, 70);
    }

    #[test]
    fn test_rethreshold_keeps_scores_and_keywords() {
        let stored = StoredScreeningResult::new(
            &job(),
            vec![scored("a", 70, 60), scored("b", 65, 60)],
            60,
        );
        let raised = stored.rethreshold(68);

        assert_eq!(raised.threshold, 68);
        assert_eq!(raised.qualified_candidates, 1);
        assert_eq!(raised.id, stored.id);
        for (before, after) in stored.scored_resumes.iter().zip(&raised.scored_resumes) {
            assert_eq!(before.score, after.score);
            assert_eq!(before.matched_keywords, after.matched_keywords);
        }
        assert_eq!(raised.scored_resumes[1].status, ResumeStatus::Rejected);
    }

    #[test]
    fn test_serde_round_trip_preserves_timestamps() {
        let stored = StoredScreeningResult::new(&job(), vec![scored("a", 42, 60)], 60);
        let json = serde_json::to_string(&stored).unwrap();
        let restored: StoredScreeningResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, stored);
        assert_eq!(
            restored.scored_resumes[0].resume.uploaded_at,
            stored.scored_resumes[0].resume.uploaded_at
        );
    }
}
