//! RepsClient - free-text search against the Reps API (v1).

use async_trait::async_trait;
use reqwest::Url;

use woodstock_core::config::SyncConfig;
use woodstock_core::error::Result;
use woodstock_core::lookup::{LookupOutcome, RepRecord, RepsLookup};

use crate::api_client::{ApiClient, build_url};

/// Search client for the public Reps API.
#[derive(Clone)]
pub struct RepsClient {
    api: ApiClient,
    api_url: String,
    limit: String,
}

impl RepsClient {
    pub fn new(api: ApiClient, config: &SyncConfig) -> Self {
        Self {
            api,
            api_url: config.reps_api_url.clone(),
            limit: config.results_limit.to_string(),
        }
    }

    /// Builds `?format=json&limit=..&query=..`.
    pub fn search_url(&self, query: &str) -> Result<Url> {
        build_url(
            &self.api_url,
            &[
                ("format", "json"),
                ("limit", self.limit.as_str()),
                ("query", query),
            ],
        )
    }
}

#[async_trait]
impl RepsLookup for RepsClient {
    async fn search(&self, query: &str) -> Result<LookupOutcome<RepRecord>> {
        let url = self.search_url(query)?;
        self.api.query_as(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_search_url() {
        let api = ApiClient::new(Duration::from_secs(1)).unwrap();
        let client = RepsClient::new(api, &SyncConfig::default());

        let url = client.search_url("alice@example.org").unwrap();
        assert_eq!(
            url.as_str(),
            "https://reps.mozilla.org/api/v1/rep/?format=json&limit=200&query=alice%40example.org"
        );
    }

    #[test]
    fn test_custom_limit() {
        let api = ApiClient::new(Duration::from_secs(1)).unwrap();
        let config = SyncConfig {
            results_limit: 5,
            ..SyncConfig::default()
        };
        let client = RepsClient::new(api, &config);

        let url = client.search_url("x").unwrap();
        assert!(url.as_str().contains("limit=5"));
    }
}
