//! Group repository trait.

use super::model::MozillianGroup;
use crate::error::Result;

/// An abstract repository for community groups.
#[async_trait::async_trait]
pub trait GroupRepository: Send + Sync {
    /// Returns the group with this name, creating it first if needed.
    ///
    /// Calling this twice with the same name yields the same group id.
    async fn find_or_create_by_name(&self, name: &str) -> Result<MozillianGroup>;

    /// Returns the groups whose ids are listed. Unknown ids are ignored.
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<MozillianGroup>>;

    /// Returns every stored group.
    async fn list_all(&self) -> Result<Vec<MozillianGroup>>;
}
