//! Core trait for data migrations.

use async_trait::async_trait;

use woodstock_core::error::Result;

/// A forward-only data migration.
///
/// Migrations are applied in registration order and recorded by name, so
/// each one runs at most once per store. `apply` must still be idempotent:
/// the record can be lost (for example when the store is restored from a
/// backup taken between the write and the bookkeeping).
#[async_trait]
pub trait DataMigration: Send + Sync {
    /// Stable identifier recorded in the ledger, e.g. `0004_add_events`.
    fn name(&self) -> &str;

    /// Returns a human-readable description of this migration.
    ///
    /// Used for logging purposes.
    fn description(&self) -> &str;

    /// Applies the migration. There is no reverse operation.
    async fn apply(&self) -> Result<()>;
}
