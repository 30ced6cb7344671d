mod ai;
mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::ai::HeuristicTalentAi;
use crate::config::Config;
use crate::matching::scorer::HeuristicMatchScorer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::memory::InMemoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent API v{}", env!("CARGO_PKG_VERSION"));

    // Load the talent store (embedded demo data unless SEED_DATA_PATH is set)
    let repo = Arc::new(InMemoryStore::load(config.seed_data_path.as_deref()).await?);

    // Heuristic backends; both are injected, never global
    let scorer = Arc::new(HeuristicMatchScorer);
    let ai = Arc::new(HeuristicTalentAi::new(config.ai_rng_seed)?);
    match config.ai_rng_seed {
        Some(seed) => info!("AI heuristics seeded with {seed}"),
        None => info!("AI heuristics seeded from entropy"),
    }
    info!(
        "Job matching returns up to {} candidates",
        config.match_candidates_limit
    );

    // Build app state
    let state = AppState {
        repo,
        scorer,
        ai,
        config: config.clone(),
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
