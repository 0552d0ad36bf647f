use anyhow::Result;
use shared::config::ConsolidatorConfig;

use crate::di::DependenciesInject;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(config: &ConsolidatorConfig) -> Result<Self> {
        let di_container = DependenciesInject::new(config)?;

        Ok(Self { di_container })
    }
}
