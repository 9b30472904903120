//! Persisted screening results: a size-bounded repository keyed by result id.
//!
//! `AppState` holds an `Arc<dyn ResultsRepository>`: Postgres when
//! `DATABASE_URL` is set, otherwise the in-memory store.

pub mod handlers;
pub mod memory;
pub mod postgres;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::stored::StoredScreeningResult;

/// Records kept by a repository unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Storage for saved screening runs, most recent first.
///
/// `upsert` puts the record at the front, replacing any record with the same
/// id, then evicts everything beyond `capacity()`. A failed write leaves the
/// previous contents untouched.
#[async_trait]
pub trait ResultsRepository: Send + Sync {
    async fn upsert(&self, result: StoredScreeningResult) -> Result<(), AppError>;

    async fn list(&self) -> Result<Vec<StoredScreeningResult>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<StoredScreeningResult>, AppError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Returns the number of records removed.
    async fn clear(&self) -> Result<u64, AppError>;

    fn capacity(&self) -> usize;

    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// Listing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultsSort {
    #[default]
    Date,
    Score,
    Candidates,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: ResultsSort,
}

impl ResultsQuery {
    /// Case-insensitive search on job title and company, then a stable sort,
    /// newest / highest / largest first.
    pub fn apply(&self, results: Vec<StoredScreeningResult>) -> Vec<StoredScreeningResult> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matching: Vec<StoredScreeningResult> = match needle {
            Some(needle) => results
                .into_iter()
                .filter(|r| {
                    r.job_title.to_lowercase().contains(&needle)
                        || r.company.to_lowercase().contains(&needle)
                })
                .collect(),
            None => results,
        };

        match self.sort_by {
            ResultsSort::Date => matching.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ResultsSort::Score => matching.sort_by(|a, b| b.average_score.cmp(&a.average_score)),
            ResultsSort::Candidates => {
                matching.sort_by(|a, b| b.total_candidates.cmp(&a.total_candidates))
            }
        }
        matching
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Usage
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageUsage {
    pub stored: usize,
    pub capacity: usize,
    /// Serialized JSON size of every stored record.
    pub used_bytes: usize,
    /// `stored / capacity`, 0 – 100, rounded.
    pub percentage: u32,
}

impl StorageUsage {
    pub fn measure(records: &[StoredScreeningResult], capacity: usize) -> anyhow::Result<Self> {
        let used_bytes = serde_json::to_vec(records)
            .context("Failed to serialize stored results")?
            .len();
        let percentage = if capacity == 0 {
            0
        } else {
            ((records.len() as f64 / capacity as f64) * 100.0).round() as u32
        };
        Ok(Self {
            stored: records.len(),
            capacity,
            used_bytes,
            percentage,
        })
    }
}

pub async fn usage(repo: &dyn ResultsRepository) -> Result<StorageUsage, AppError> {
    let records = repo.list().await?;
    Ok(StorageUsage::measure(&records, repo.capacity())?)
}
