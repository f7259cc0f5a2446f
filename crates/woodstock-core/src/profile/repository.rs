//! Profile repository trait.

use super::model::MozillianProfile;
use crate::error::Result;

/// An abstract repository for tracked profiles.
///
/// The sync services only rely on these operations; they never assume a
/// query language behind them.
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns every stored profile.
    async fn list_all(&self) -> Result<Vec<MozillianProfile>>;

    /// Finds a profile by its email.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(MozillianProfile))`: Profile found
    /// - `Ok(None)`: No profile with that email
    /// - `Err(WoodstockError)`: Storage could not be read
    async fn find_by_email(&self, email: &str) -> Result<Option<MozillianProfile>>;

    /// Inserts a new profile.
    ///
    /// Fails with a `DataAccess` error if the email is already taken.
    async fn create(&self, profile: &MozillianProfile) -> Result<()>;

    /// Writes a profile back, replacing the record with the same id.
    ///
    /// Fails with a `NotFound` error if no record has that id, and with a
    /// `DataAccess` error if another record already has the profile's email.
    async fn save(&self, profile: &MozillianProfile) -> Result<()>;
}
