mod config;
mod error;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    // Non-fatal: a missing .env just means the real environment is used.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "qurricular server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = HostConfig::from_env()?;
    let app = routes::app(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, mock_backend = config.mock_backend, "qurricular listening");
    axum::serve(listener, app).await?;
    Ok(())
}
