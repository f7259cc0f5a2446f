use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use woodstock_core::config::SyncConfig;
use woodstock_infrastructure::{ConfigService, JsonRecordStore};

/// Paths given on the command line, if any.
pub struct PathOverrides {
    pub config: Option<PathBuf>,
    pub store: Option<PathBuf>,
}

/// Opens the record store, falling back to the platform data dir.
pub fn open_store(paths: &PathOverrides) -> Result<Arc<JsonRecordStore>> {
    let store = match &paths.store {
        Some(path) => JsonRecordStore::with_path(path.clone()),
        None => JsonRecordStore::new_default().context("Failed to locate the record store")?,
    };
    tracing::debug!("Using record store at {}", store.path().display());
    Ok(Arc::new(store))
}

/// Loads `SyncConfig` from file and environment.
pub fn load_config(paths: &PathOverrides) -> Result<SyncConfig> {
    let service = match &paths.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new_default().context("Failed to locate the config file")?,
    };
    let config = service
        .load()
        .with_context(|| format!("Failed to load config from {}", service.path().display()))?;
    Ok(config)
}
