use anyhow::{Context, Result, anyhow};

use crate::domain::TransactionCategory;

/// Configuration of one lookup-service instance. The category it serves is
/// deployment configuration, not code: the same binary runs three times.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub database_url: String,
    pub port: u16,
    pub run_migrations: bool,
    pub category: TransactionCategory,
}

impl LookupConfig {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let port = parse_port(&std::env::var("PORT").context("Missing env: PORT")?)?;

        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;
        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'",
                ));
            }
        };

        let category = std::env::var("LOOKUP_CATEGORY")
            .context("Missing env: LOOKUP_CATEGORY")?
            .parse::<TransactionCategory>()
            .map_err(|e| anyhow!("LOOKUP_CATEGORY: {e}"))?;

        Ok(Self {
            database_url,
            port,
            run_migrations,
            category,
        })
    }
}

/// Configuration of the consolidator: its own port plus the base URL of
/// each lookup service. Fixed at process start, not hot-reloadable.
#[derive(Debug, Clone)]
pub struct ConsolidatorConfig {
    pub port: u16,
    pub success: BackendConfig,
    pub failure: BackendConfig,
    pub pending: BackendConfig,
}

impl ConsolidatorConfig {
    pub fn init() -> Result<Self> {
        let port = parse_port(&std::env::var("PORT").context("Missing env: PORT")?)?;

        Ok(Self {
            port,
            success: BackendConfig::from_env("SUCCESS")?,
            failure: BackendConfig::from_env("FAILURE")?,
            pending: BackendConfig::from_env("PENDING")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    pub fn from_env(prefix: &str) -> Result<Self> {
        let base_url = std::env::var(format!("{prefix}_BASE_URL"))
            .context(format!("Missing env: {prefix}_BASE_URL"))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.parse::<u16>().context("PORT must be a valid u16 integer")
}
