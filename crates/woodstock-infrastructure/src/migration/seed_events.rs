//! Seeds the initial voting events.

use async_trait::async_trait;
use std::sync::Arc;

use woodstock_core::error::Result;
use woodstock_core::event::{Event, EventRepository};

use super::traits::DataMigration;

/// Events every installation starts with, in creation order.
pub const SEED_EVENTS: [&str; 3] = ["MozFest", "All Hands", "Leadership Summit"];

/// Creates each of [`SEED_EVENTS`] unless an event with that name exists.
pub struct SeedEventsMigration {
    events: Arc<dyn EventRepository>,
}

impl SeedEventsMigration {
    pub const NAME: &'static str = "0004_add_events";

    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl DataMigration for SeedEventsMigration {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Seed MozFest, All Hands and Leadership Summit events"
    }

    async fn apply(&self) -> Result<()> {
        for name in SEED_EVENTS {
            if self.events.exists_by_name(name).await? {
                continue;
            }
            self.events.create(&Event::new(name)).await?;
            tracing::debug!("Seeded event '{}'", name);
        }
        Ok(())
    }
}
