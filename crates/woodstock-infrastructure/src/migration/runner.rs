//! Applies pending data migrations in order.

use std::sync::Arc;

use woodstock_core::WoodstockError;
use woodstock_core::error::Result;
use woodstock_core::migration::MigrationLedger;

use super::traits::DataMigration;

/// Runs registered migrations that the ledger has not seen yet.
///
/// # Example
///
/// ```ignore
/// let mut runner = MigrationRunner::new(store.clone());
/// runner.register(Arc::new(SeedEventsMigration::new(store.clone())));
/// let applied = runner.run_pending().await?;
/// ```
pub struct MigrationRunner {
    ledger: Arc<dyn MigrationLedger>,
    migrations: Vec<Arc<dyn DataMigration>>,
}

impl MigrationRunner {
    pub fn new(ledger: Arc<dyn MigrationLedger>) -> Self {
        Self {
            ledger,
            migrations: Vec::new(),
        }
    }

    /// Appends a migration to the chain.
    ///
    /// # Panics
    ///
    /// Panics if a migration with the same name is already registered.
    pub fn register(&mut self, migration: Arc<dyn DataMigration>) {
        assert!(
            !self.migrations.iter().any(|m| m.name() == migration.name()),
            "Migration '{}' registered twice",
            migration.name()
        );
        self.migrations.push(migration);
    }

    /// Applies every pending migration and returns the names applied.
    ///
    /// Stops at the first failure; migrations applied before it stay recorded.
    pub async fn run_pending(&self) -> Result<Vec<String>> {
        let mut applied = Vec::new();

        for migration in &self.migrations {
            if self.ledger.is_applied(migration.name()).await? {
                tracing::debug!("Migration {} already applied", migration.name());
                continue;
            }

            tracing::info!(
                "Applying migration {}: {}",
                migration.name(),
                migration.description()
            );
            migration.apply().await.map_err(|e| {
                WoodstockError::migration(format!("{} failed: {}", migration.name(), e))
            })?;
            self.ledger.mark_applied(migration.name()).await?;
            applied.push(migration.name().to_string());
        }

        Ok(applied)
    }
}
