mod analysis;
mod config;
mod db;
mod errors;
mod export;
mod models;
mod routes;
mod screening;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::screening::scorer::{MatchScorer, WeightedKeywordScorer};
use crate::state::AppState;
use crate::storage::memory::InMemoryResultsRepository;
use crate::storage::postgres::PgResultsRepository;
use crate::storage::ResultsRepository;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener v{}", env!("CARGO_PKG_VERSION"));

    // Results repository: Postgres when configured, in-memory otherwise
    let results: Arc<dyn ResultsRepository> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            Arc::new(PgResultsRepository::new(pool, config.max_stored_results))
        }
        None => {
            warn!("DATABASE_URL not set; screening results are kept in memory only");
            Arc::new(InMemoryResultsRepository::new(config.max_stored_results))
        }
    };
    info!(
        "Results repository: {} (capacity {})",
        results.backend(),
        results.capacity()
    );

    let scorer: Arc<dyn MatchScorer> = Arc::new(WeightedKeywordScorer::default());
    info!(
        "Match scorer: {} (default threshold {})",
        scorer.backend(),
        config.score_threshold
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        scorer,
        results,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
