//! Main Entrypoint for the Interviewer API Service
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Initializing logging.
//! 3. Building the question bank, the scorer and the interview engine.
//! 4. Constructing the Axum router and applying middleware.
//! 5. Starting the web server and handling graceful shutdown.

use anyhow::Context;
use interviewer_api::{
    config::{Config, ScorerProvider},
    router::create_router,
    state::AppState,
};
use interviewer_core::{
    bank::QuestionBank,
    engine::InterviewEngine,
    ollama::OllamaClient,
    scoring::{AnswerScorer, KeywordScorer},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Listens for the `Ctrl+C` signal to gracefully shut down the server.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal. Shutting down gracefully...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!("Configuration loaded. Initializing application state...");

    // --- 3. Initialize the Engine ---
    let bank = Arc::new(QuestionBank::seeded());

    let scorer: Arc<dyn AnswerScorer> = match &config.scorer {
        ScorerProvider::Keyword => {
            info!("Using keyword scorer.");
            Arc::new(KeywordScorer)
        }
        ScorerProvider::Ollama => {
            info!(url = %config.ollama_url, model = %config.ollama_model, "Using Ollama scorer.");
            let client = OllamaClient::new(&config.ollama_url, &config.ollama_model);
            if !client.health_check().await {
                warn!(
                    "Ollama API is unreachable; submissions will fall back to the keyword heuristic."
                );
            }
            Arc::new(client)
        }
    };

    let engine = Arc::new(InterviewEngine::new(bank, scorer));

    let app_state = Arc::new(AppState {
        engine,
        config: Arc::new(config.clone()),
    });

    // --- 4. Create Router and Apply Middleware ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(app_state).layer(cors);

    // --- 5. Start Server ---
    info!(
        scorer = ?config.scorer,
        bind_address = %config.bind_address,
        "Service configured. Starting server..."
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server has shut down.");
    Ok(())
}
