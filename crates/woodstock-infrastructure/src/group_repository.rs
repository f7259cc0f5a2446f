//! `GroupRepository` over the JSON record store.

use async_trait::async_trait;

use woodstock_core::error::Result;
use woodstock_core::group::{GroupRepository, MozillianGroup};

use crate::record_store::JsonRecordStore;

#[async_trait]
impl GroupRepository for JsonRecordStore {
    async fn find_or_create_by_name(&self, name: &str) -> Result<MozillianGroup> {
        self.write(|doc| {
            if let Some(existing) = doc.groups.iter().find(|g| g.name == name) {
                return Ok(existing.clone());
            }
            let group = MozillianGroup::new(name);
            tracing::debug!("Created group '{}'", name);
            doc.groups.push(group.clone());
            Ok(group)
        })
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<MozillianGroup>> {
        Ok(self
            .read()?
            .groups
            .into_iter()
            .filter(|g| ids.contains(&g.id))
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<MozillianGroup>> {
        Ok(self.read()?.groups)
    }
}
