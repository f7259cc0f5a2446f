use std::sync::Arc;

use anyhow::{Context, Result};
use woodstock_infrastructure::JsonRecordStore;
use woodstock_infrastructure::migration::build_migration_runner;

use super::utils::{PathOverrides, open_store};

pub async fn run(paths: &PathOverrides) -> Result<()> {
    let store = open_store(paths)?;
    let applied = apply_pending(store).await?;

    if applied.is_empty() {
        println!("No pending migrations.");
    } else {
        for name in applied {
            println!("Applied {}", name);
        }
    }
    Ok(())
}

/// Runs every migration the store has not seen yet.
pub async fn apply_pending(store: Arc<JsonRecordStore>) -> Result<Vec<String>> {
    build_migration_runner(store)
        .run_pending()
        .await
        .context("Failed to apply migrations")
}
