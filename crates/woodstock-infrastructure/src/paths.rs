//! Unified path management for woodstock files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/woodstock/         # Config directory
//! └── config.toml              # API endpoints and credentials
//!
//! ~/.local/share/woodstock/    # Data directory
//! └── store.json               # Profiles, groups, events, applied migrations
//! ```

use std::path::PathBuf;

use woodstock_core::WoodstockError;

const APP_DIR: &str = "woodstock";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for WoodstockError {
    fn from(e: PathError) -> Self {
        WoodstockError::config(e.to_string())
    }
}

/// Unified path management for woodstock.
///
/// Paths follow the platform conventions reported by the `dirs` crate (XDG on
/// Linux, `Library/Application Support` on macOS, `AppData` on Windows).
pub struct WoodstockPaths;

impl WoodstockPaths {
    /// Returns the woodstock configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the woodstock data directory.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the JSON record store.
    pub fn store_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store.json"))
    }
}
