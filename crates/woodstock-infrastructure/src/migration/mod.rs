//! Forward-only data migrations.
//!
//! Migrations run at schema-upgrade time (`woodstock migrate`, and before
//! every sync command). Each one is recorded in the store's ledger once
//! applied.
//!
//! # Adding a Migration
//!
//! 1. Implement [`DataMigration`] in a new module
//! 2. Register it in [`build_migration_runner`] after the existing ones
//!
//! Names are never reused; the ledger only knows names.

mod runner;
mod seed_events;
mod traits;

pub use runner::MigrationRunner;
pub use seed_events::{SEED_EVENTS, SeedEventsMigration};
pub use traits::DataMigration;

use std::sync::Arc;

use crate::record_store::JsonRecordStore;

/// Builds a runner with every known migration registered in order.
pub fn build_migration_runner(store: Arc<JsonRecordStore>) -> MigrationRunner {
    let mut runner = MigrationRunner::new(store.clone());
    runner.register(Arc::new(SeedEventsMigration::new(store)));
    runner
}
