//! Reps Sync Service
//!
//! Copies each member's Reps display name onto the local profile, searching
//! the Reps API by email.

use std::sync::Arc;
use tracing::instrument;

use woodstock_core::error::Result;
use woodstock_core::lookup::{LookupOutcome, RepsLookup};
use woodstock_core::profile::{MozillianProfile, ProfileRepository};

use crate::sync_report::SyncReport;

/// Service for syncing `reps_display_name` with reps.mozilla.org.
pub struct RepsSyncService {
    reps: Arc<dyn RepsLookup>,
    profile_repository: Arc<dyn ProfileRepository>,
}

impl RepsSyncService {
    pub fn new(reps: Arc<dyn RepsLookup>, profile_repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            reps,
            profile_repository,
        }
    }

    pub async fn sync_all(&self) -> Result<SyncReport> {
        self.sync(None).await
    }

    /// Syncs the given profiles, or every stored profile when `None`.
    ///
    /// Any returned Rep causes a save, even one without
    /// `profile.display_name`; only the display name itself is conditional.
    #[instrument(level = "info", skip_all)]
    pub async fn sync(&self, profiles: Option<Vec<MozillianProfile>>) -> Result<SyncReport> {
        let profiles = match profiles {
            Some(profiles) => profiles,
            None => self.profile_repository.list_all().await?,
        };

        let mut report = SyncReport::default();

        for mut profile in profiles {
            let rep = match self.reps.search(&profile.email).await {
                Ok(LookupOutcome::Found(rep)) => rep,
                Ok(LookupOutcome::NotFound) => {
                    report.record_skipped();
                    continue;
                }
                Err(e) => {
                    tracing::warn!("Reps lookup failed for {}, skipping: {}", profile.email, e);
                    report.record_failed();
                    continue;
                }
            };

            if let Some(display_name) = rep.display_name() {
                profile.reps_display_name = display_name.to_string();
            }
            self.profile_repository.save(&profile).await?;

            tracing::debug!("Mozillian {} successfully updated", profile.email);
            report.record_updated();
        }

        tracing::info!("Reps sync finished: {}", report);
        Ok(report)
    }
}
