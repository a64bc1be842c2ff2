//! Maktab - virtual tutors chat backend
//!
//! Serves a persona-based tutoring session backed by hosted
//! text-generation models, for a browser front end to talk to.

mod api;
mod llm;
mod persona;
#[cfg(test)]
mod proptests;
mod session;

use api::{create_router, AppState};
use llm::{LlmConfig, ModelRegistry};
use session::Session;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maktab=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration. A Space runtime sets SPACE_ID and expects the
    // server on port 7860; local runs honor MAKTAB_PORT.
    let hosted = std::env::var("SPACE_ID").is_ok();
    let port: u16 = if hosted {
        7860
    } else {
        std::env::var("MAKTAB_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(7860)
    };

    // Initialize the model registry and the session
    let llm_config = LlmConfig::from_env();
    let registry = Arc::new(ModelRegistry::new(&llm_config));

    if registry.has_credentials() {
        tracing::info!(
            models = ?registry.available_models(),
            default = %registry.default_model_id(),
            "Model registry initialized"
        );
    } else {
        tracing::warn!("HF_TOKEN is not set. Generation calls will fail until it is configured.");
    }

    let session = Session::new(registry.clone())?;
    let state = AppState::new(session, registry);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state).layer(cors).layer(compression);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, hosted, "Maktab server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
