use anyhow::{Context, Result};
use dotenv::dotenv;
use lookup::{handler::AppRouter, state::AppState};
use shared::{
    config::{ConnectionManager, LookupConfig},
    utils::Logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let config = LookupConfig::init().context("Failed to load configuration")?;

    let _logger = Logger::new(&format!("lookup-{}", config.category), is_dev);

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.run_migrations)
        .await
        .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool, config.category)
        .await
        .context("Failed to create AppState")?;

    info!("starting {} lookup service", config.category);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
