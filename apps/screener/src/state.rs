use std::sync::Arc;

use crate::config::Config;
use crate::screening::scorer::MatchScorer;
use crate::storage::ResultsRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: WeightedKeywordScorer.
    pub scorer: Arc<dyn MatchScorer>,
    /// Saved screening runs: Postgres when configured, in-memory otherwise.
    pub results: Arc<dyn ResultsRepository>,
}
