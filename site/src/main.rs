// Mortgage site - marketing pages, lead intake and admin API
// Entry point and server setup

use anyhow::Context;
use mortgage_site::app::AppState;
use mortgage_site::routes;
use mortgage_site::services::SettingsService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mortgage_site=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting mortgage site");

    let settings_service = SettingsService::from_env();
    let settings = settings_service
        .load()
        .await
        .with_context(|| format!("loading settings from {:?}", settings_service.path()))?;

    let state = AppState::from_settings(&settings)
        .await
        .context("initializing application state")?;

    let listener = tokio::net::TcpListener::bind(&settings.server.bind_address)
        .await
        .with_context(|| format!("binding {}", settings.server.bind_address))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
