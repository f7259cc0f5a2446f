//! Applied-migration bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A data migration that has already run against the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMigration {
    pub name: String,
    pub applied_at: DateTime<Utc>,
}

/// Records which forward-only data migrations have been applied.
#[async_trait::async_trait]
pub trait MigrationLedger: Send + Sync {
    async fn is_applied(&self, name: &str) -> Result<bool>;

    /// Records `name` as applied now. Recording twice is a no-op.
    async fn mark_applied(&self, name: &str) -> Result<()>;

    async fn list_applied(&self) -> Result<Vec<AppliedMigration>>;
}
