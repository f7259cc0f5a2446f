//! `ProfileRepository` over the JSON record store.

use async_trait::async_trait;

use woodstock_core::WoodstockError;
use woodstock_core::error::Result;
use woodstock_core::profile::{MozillianProfile, ProfileRepository};

use crate::record_store::JsonRecordStore;

#[async_trait]
impl ProfileRepository for JsonRecordStore {
    async fn list_all(&self) -> Result<Vec<MozillianProfile>> {
        Ok(self.read()?.profiles)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<MozillianProfile>> {
        Ok(self
            .read()?
            .profiles
            .into_iter()
            .find(|p| p.email == email))
    }

    async fn create(&self, profile: &MozillianProfile) -> Result<()> {
        self.write(|doc| {
            if doc.profiles.iter().any(|p| p.email == profile.email) {
                return Err(WoodstockError::data_access(format!(
                    "profile with email '{}' already exists",
                    profile.email
                )));
            }
            doc.profiles.push(profile.clone());
            Ok(())
        })
    }

    async fn save(&self, profile: &MozillianProfile) -> Result<()> {
        self.write(|doc| {
            if doc
                .profiles
                .iter()
                .any(|p| p.email == profile.email && p.id != profile.id)
            {
                return Err(WoodstockError::data_access(format!(
                    "profile with email '{}' already exists",
                    profile.email
                )));
            }
            let slot = doc
                .profiles
                .iter_mut()
                .find(|p| p.id == profile.id)
                .ok_or_else(|| WoodstockError::not_found("profile", profile.id.clone()))?;
            *slot = profile.clone();
            Ok(())
        })
    }
}
