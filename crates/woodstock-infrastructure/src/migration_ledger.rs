//! `MigrationLedger` over the JSON record store.

use async_trait::async_trait;
use chrono::Utc;

use woodstock_core::error::Result;
use woodstock_core::migration::{AppliedMigration, MigrationLedger};

use crate::record_store::JsonRecordStore;

#[async_trait]
impl MigrationLedger for JsonRecordStore {
    async fn is_applied(&self, name: &str) -> Result<bool> {
        Ok(self.read()?.migrations.iter().any(|m| m.name == name))
    }

    async fn mark_applied(&self, name: &str) -> Result<()> {
        self.write(|doc| {
            if !doc.migrations.iter().any(|m| m.name == name) {
                doc.migrations.push(AppliedMigration {
                    name: name.to_string(),
                    applied_at: Utc::now(),
                });
            }
            Ok(())
        })
    }

    async fn list_applied(&self) -> Result<Vec<AppliedMigration>> {
        Ok(self.read()?.migrations)
    }
}
