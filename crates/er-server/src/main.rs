//! Emotion Reflection API — single-binary HTTP server.

use er_core::ServerConfig;
use er_server::{app_with_state, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!(debug = config.debug, "Starting Emotion Reflection API");
    info!(origins = ?config.cors_origins, "CORS enabled");
    if config.analyze_delay_ms > 0 {
        info!(delay_ms = config.analyze_delay_ms, "Simulated processing delay enabled");
    }

    let addr = config.bind_addr();
    let app = app_with_state(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
