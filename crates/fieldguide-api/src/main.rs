//! Fieldguide API server entry point.

use std::error::Error;
use std::sync::Arc;

use fieldguide_api::config::AppConfig;
use fieldguide_api::engines::{TracingHapticEngine, TracingSpeechEngine};
use fieldguide_api::routes;
use fieldguide_api::state::AppState;
use fieldguide_core::clock::SystemClock;
use fieldguide_session::application::runtime::SessionPorts;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Fieldguide API server");

    // Read configuration from environment.
    let config = AppConfig::from_env()?;
    let catalog = config.load_catalog()?;
    tracing::info!(
        subjects = catalog.len(),
        version_hash = catalog.version_hash(),
        "catalog ready"
    );

    // Build application state.
    let ports = SessionPorts {
        clock: Arc::new(SystemClock),
        haptics: Arc::new(TracingHapticEngine),
        speech: Arc::new(TracingSpeechEngine),
    };
    let app_state = AppState::new(Arc::new(catalog), ports, config.feedback)
        .with_session_limit(config.max_sessions);

    // TODO: Replace CorsLayer::permissive() with the device shell's origins.
    let app = routes::build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
