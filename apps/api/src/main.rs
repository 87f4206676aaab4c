mod config;
mod errors;
mod matching;
mod routes;
mod state;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::scoring::KeywordMatchScorer;
use crate::matching::vocabulary::SkillVocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JDMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Skill vocabulary: file-backed when SKILL_VOCAB_FILE is set
    let vocabulary = match &config.skill_vocab_file {
        Some(path) => Arc::new(SkillVocabulary::from_file(path)?),
        None => Arc::new(SkillVocabulary::default()),
    };
    info!("Skill vocabulary loaded ({} skills)", vocabulary.len());

    // Match scorer (KeywordMatchScorer by default — trait object, swappable)
    let scorer = Arc::new(KeywordMatchScorer);

    let state = AppState {
        config: config.clone(),
        vocabulary,
        scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
