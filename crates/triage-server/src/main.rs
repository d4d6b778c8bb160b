use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use triage_server::config::{LogFormat, ServerConfig};
use triage_server::state::AppState;
use triage_storage::file::JsonFileStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let store = JsonFileStore::in_dir(&config.data_dir);
    tracing::info!(path = %store.path().display(), "using patient file");

    let app = triage_server::router(AppState::new(Arc::new(store)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "triage server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("triage server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
