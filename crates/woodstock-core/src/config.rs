//! Sync configuration model.
//!
//! The configuration is passed explicitly into the API clients and sync
//! services; nothing reads ambient settings at call time.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WoodstockError};

/// Default Mozillians directory endpoint (API v1 users resource).
pub const DEFAULT_MOZILLIANS_API_URL: &str = "https://mozillians.org/api/v1/users/";
/// Default Reps directory endpoint (API v1 rep resource).
pub const DEFAULT_REPS_API_URL: &str = "https://reps.mozilla.org/api/v1/rep/";
/// Maximum number of objects requested per query.
pub const API_RESULTS_LIMIT: u32 = 200;
/// Request timeout applied when the configuration does not set one.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for both external directories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncConfig {
    /// Base URL of the Mozillians directory API.
    #[serde(default = "default_mozillians_api_url")]
    pub mozillians_api_url: String,
    /// Application name registered with the Mozillians API.
    #[serde(default)]
    pub mozillians_app_name: String,
    /// Application key registered with the Mozillians API.
    #[serde(default)]
    pub mozillians_app_key: String,
    /// Base URL of the Reps API.
    #[serde(default = "default_reps_api_url")]
    pub reps_api_url: String,
    /// Value sent as the `limit` query parameter.
    #[serde(default = "default_results_limit")]
    pub results_limit: u32,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_mozillians_api_url() -> String {
    DEFAULT_MOZILLIANS_API_URL.to_string()
}

fn default_reps_api_url() -> String {
    DEFAULT_REPS_API_URL.to_string()
}

fn default_results_limit() -> u32 {
    API_RESULTS_LIMIT
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            mozillians_api_url: default_mozillians_api_url(),
            mozillians_app_name: String::new(),
            mozillians_app_key: String::new(),
            reps_api_url: default_reps_api_url(),
            results_limit: default_results_limit(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl SyncConfig {
    /// Checks what the directory client needs: endpoint and credentials.
    ///
    /// The Reps API is public, so only the directory client needs the
    /// credentials.
    pub fn validate_mozillians(&self) -> Result<()> {
        if self.mozillians_api_url.trim().is_empty() {
            return Err(WoodstockError::config("mozillians_api_url is empty"));
        }
        if self.mozillians_app_name.trim().is_empty() {
            return Err(WoodstockError::config("mozillians_app_name is not set"));
        }
        if self.mozillians_app_key.trim().is_empty() {
            return Err(WoodstockError::config("mozillians_app_key is not set"));
        }
        Ok(())
    }

    pub fn validate_reps(&self) -> Result<()> {
        if self.reps_api_url.trim().is_empty() {
            return Err(WoodstockError::config("reps_api_url is empty"));
        }
        Ok(())
    }
}
