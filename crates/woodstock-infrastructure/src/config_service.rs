//! Configuration loading.
//!
//! Reads `SyncConfig` from `config.toml` and applies environment overrides.
//!
//! Priority:
//! 1. Environment variables (`MOZILLIANS_API_URL`, `MOZILLIANS_APP_NAME`,
//!    `MOZILLIANS_APP_KEY`, `REPS_API_URL`)
//! 2. `config.toml`
//! 3. Built-in defaults

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use woodstock_core::config::SyncConfig;
use woodstock_core::error::Result;

use crate::paths::WoodstockPaths;

/// Loads the sync configuration from disk and the environment.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the default `~/.config/woodstock/config.toml`.
    pub fn new_default() -> Result<Self> {
        Ok(Self::with_path(WoodstockPaths::config_file()?))
    }

    /// Uses a custom config file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration with environment overrides applied.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load(&self) -> Result<SyncConfig> {
        let config = self.load_file()?;
        Ok(apply_overrides(config, |key| env::var(key).ok()))
    }

    fn load_file(&self) -> Result<SyncConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "Config file {} not found, using defaults",
                self.path.display()
            );
            return Ok(SyncConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Overlays environment values on top of `config`.
///
/// `lookup` abstracts `std::env::var` so tests do not touch the process
/// environment. Empty values are ignored.
pub fn apply_overrides<F>(mut config: SyncConfig, lookup: F) -> SyncConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get("MOZILLIANS_API_URL") {
        config.mozillians_api_url = url;
    }
    if let Some(name) = get("MOZILLIANS_APP_NAME") {
        config.mozillians_app_name = name;
    }
    if let Some(key) = get("MOZILLIANS_APP_KEY") {
        config.mozillians_app_key = key;
    }
    if let Some(url) = get("REPS_API_URL") {
        config.reps_api_url = url;
    }

    config
}
