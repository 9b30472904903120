use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::analysis::ResumeAnalysis;

/// A resume as plain text, exactly as it was read or pasted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: Uuid,
    pub filename: String,
    pub content: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Resume {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename: filename.into(),
            content: content.into(),
            uploaded_at: Utc::now(),
        }
    }

    /// Resume pasted by hand; `position` is 1-based within its batch.
    pub fn manual_entry(position: usize, content: impl Into<String>) -> Self {
        Self::new(format!("Manual Entry {position}"), content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStatus {
    Qualified,
    Rejected,
}

impl ResumeStatus {
    /// Qualified iff `score >= threshold`.
    pub fn from_score(score: u32, threshold: u32) -> Self {
        if score >= threshold {
            ResumeStatus::Qualified
        } else {
            ResumeStatus::Rejected
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeStatus::Qualified => "qualified",
            ResumeStatus::Rejected => "rejected",
        }
    }
}

/// A resume together with the analysis and score of one screening pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResume {
    #[serde(flatten)]
    pub resume: Resume,
    pub score: u32,
    pub matched_keywords: Vec<String>,
    pub analysis: ResumeAnalysis,
    pub status: ResumeStatus,
}

impl ScoredResume {
    /// Same analysis and score with the status re-derived for a new threshold.
    pub fn with_threshold(&self, threshold: u32) -> Self {
        Self {
            status: ResumeStatus::from_score(self.score, threshold),
            ..self.clone()
        }
    }
}
