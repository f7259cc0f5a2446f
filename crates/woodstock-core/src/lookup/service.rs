//! Lookup traits.
//!
//! The HTTP clients implement these; the sync services depend only on the
//! traits, which keeps them testable without a network.

use super::model::{DirectoryRecord, LookupOutcome, RepRecord};
use crate::error::Result;

/// Queries the Mozillians community directory.
#[async_trait::async_trait]
pub trait DirectoryLookup: Send + Sync {
    /// Looks a member up by email.
    ///
    /// # Returns
    ///
    /// - `Ok(LookupOutcome::Found(_))`: The directory returned a match
    /// - `Ok(LookupOutcome::NotFound)`: Empty result or non-success status
    /// - `Err(WoodstockError)`: The request itself failed
    async fn find_by_email(&self, email: &str) -> Result<LookupOutcome<DirectoryRecord>>;

    /// Looks a member up by mozillians.org username.
    async fn find_by_username(&self, username: &str) -> Result<LookupOutcome<DirectoryRecord>>;
}

/// Queries the Reps directory.
#[async_trait::async_trait]
pub trait RepsLookup: Send + Sync {
    /// Runs a free-text search; the sync passes a member's email.
    async fn search(&self, query: &str) -> Result<LookupOutcome<RepRecord>>;
}
