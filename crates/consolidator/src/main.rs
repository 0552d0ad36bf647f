use anyhow::{Context, Result};
use consolidator::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{config::ConsolidatorConfig, utils::Logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let _logger = Logger::new("consolidator", is_dev);

    let config = ConsolidatorConfig::init().context("Failed to load configuration")?;

    let port = config.port;

    let state = AppState::new(&config).context("Failed to create AppState")?;

    info!("starting consolidator server");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
