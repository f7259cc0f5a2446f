//! `EventRepository` over the JSON record store.

use async_trait::async_trait;

use woodstock_core::error::Result;
use woodstock_core::event::{Event, EventRepository};

use crate::record_store::JsonRecordStore;

#[async_trait]
impl EventRepository for JsonRecordStore {
    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        Ok(self.read()?.events.iter().any(|e| e.name == name))
    }

    async fn create(&self, event: &Event) -> Result<()> {
        self.write(|doc| {
            doc.events.push(event.clone());
            Ok(())
        })
    }

    async fn list_all(&self) -> Result<Vec<Event>> {
        Ok(self.read()?.events)
    }
}
