//! Event repository trait.

use super::model::Event;
use crate::error::Result;

/// An abstract repository for events.
#[async_trait::async_trait]
pub trait EventRepository: Send + Sync {
    /// Checks whether an event with this exact name exists.
    async fn exists_by_name(&self, name: &str) -> Result<bool>;

    /// Inserts a new event.
    async fn create(&self, event: &Event) -> Result<()>;

    /// Returns every stored event in insertion order.
    async fn list_all(&self) -> Result<Vec<Event>>;
}
