//! Profile Enrichment Service
//!
//! Pulls member data from the Mozillians directory into local profiles.
//! Profiles are resolved one at a time: by email first, then by username.
//! A profile nobody recognises is left untouched.

use std::sync::Arc;
use tracing::instrument;

use woodstock_core::country::normalize_country;
use woodstock_core::error::Result;
use woodstock_core::group::GroupRepository;
use woodstock_core::lookup::{DirectoryLookup, DirectoryRecord, LookupOutcome};
use woodstock_core::profile::{MozillianProfile, PRIVATE_MOZILLIAN, ProfileRepository};

use crate::sync_report::SyncReport;

/// Service for syncing local profiles with mozillians.org.
pub struct ProfileEnrichmentService {
    directory: Arc<dyn DirectoryLookup>,
    profile_repository: Arc<dyn ProfileRepository>,
    group_repository: Arc<dyn GroupRepository>,
}

impl ProfileEnrichmentService {
    pub fn new(
        directory: Arc<dyn DirectoryLookup>,
        profile_repository: Arc<dyn ProfileRepository>,
        group_repository: Arc<dyn GroupRepository>,
    ) -> Self {
        Self {
            directory,
            profile_repository,
            group_repository,
        }
    }

    /// Syncs every stored profile.
    pub async fn sync_all(&self) -> Result<SyncReport> {
        self.sync(None).await
    }

    /// Syncs the given profiles, or every stored profile when `None`.
    ///
    /// Lookup failures only skip the affected profile, as does a directory
    /// email that already belongs to another stored profile. Store failures
    /// abort the pass; profiles saved before the failure stay saved.
    #[instrument(level = "info", skip_all)]
    pub async fn sync(&self, profiles: Option<Vec<MozillianProfile>>) -> Result<SyncReport> {
        let profiles = match profiles {
            Some(profiles) => profiles,
            None => self.profile_repository.list_all().await?,
        };

        let mut report = SyncReport::default();

        for mut profile in profiles {
            let record = match self.resolve(&profile).await {
                Ok(LookupOutcome::Found(record)) => record,
                Ok(LookupOutcome::NotFound) => {
                    report.record_skipped();
                    continue;
                }
                Err(e) => {
                    tracing::warn!("Lookup failed for {}, skipping: {}", profile.email, e);
                    report.record_failed();
                    continue;
                }
            };

            if let Some(owner) = self.email_owner(&profile, &record).await? {
                tracing::warn!(
                    "Directory email {} of {} is already used by profile {}, skipping",
                    owner.email,
                    profile.email,
                    owner.id
                );
                report.record_failed();
                continue;
            }

            merge_record(&mut profile, &record);
            self.replace_groups(&mut profile, &record).await?;
            self.profile_repository.save(&profile).await?;

            tracing::debug!("Mozillian {} successfully updated", profile.email);
            report.record_updated();
        }

        tracing::info!("Mozillians sync finished: {}", report);
        Ok(report)
    }

    /// Looks the profile up by email, falling back to the username.
    ///
    /// The username lookup is never attempted when the email lookup matches,
    /// nor when the profile has no username. A failed email lookup still
    /// falls back; its error is returned only if the fallback finds nothing.
    pub async fn resolve(
        &self,
        profile: &MozillianProfile,
    ) -> Result<LookupOutcome<DirectoryRecord>> {
        let email_error = match self.directory.find_by_email(&profile.email).await {
            Ok(LookupOutcome::Found(record)) => return Ok(LookupOutcome::Found(record)),
            Ok(LookupOutcome::NotFound) => None,
            Err(e) => {
                tracing::warn!(
                    "Email lookup failed for {}, trying username: {}",
                    profile.email,
                    e
                );
                Some(e)
            }
        };

        let fallback = if profile.mozillian_username.is_empty() {
            LookupOutcome::NotFound
        } else {
            self.directory
                .find_by_username(&profile.mozillian_username)
                .await?
        };

        match (fallback, email_error) {
            (LookupOutcome::Found(record), _) => Ok(LookupOutcome::Found(record)),
            (LookupOutcome::NotFound, Some(e)) => Err(e),
            (LookupOutcome::NotFound, None) => Ok(LookupOutcome::NotFound),
        }
    }

    /// Returns the other stored profile that already owns the email in
    /// `record`, if any.
    async fn email_owner(
        &self,
        profile: &MozillianProfile,
        record: &DirectoryRecord,
    ) -> Result<Option<MozillianProfile>> {
        let Some(email) = &record.email else {
            return Ok(None);
        };
        if *email == profile.email {
            return Ok(None);
        }
        Ok(self
            .profile_repository
            .find_by_email(email)
            .await?
            .filter(|owner| owner.id != profile.id))
    }

    /// Replaces the profile's groups with exactly those named in `record`.
    async fn replace_groups(
        &self,
        profile: &mut MozillianProfile,
        record: &DirectoryRecord,
    ) -> Result<()> {
        let mut group_ids = Vec::new();
        for name in record.groups.iter().flatten() {
            let group = self.group_repository.find_or_create_by_name(name).await?;
            group_ids.push(group.id);
        }
        profile.set_groups(group_ids);
        Ok(())
    }
}

/// Copies the fields present in `record` onto `profile`.
///
/// Absent fields keep their local value, except `full_name`, which falls
/// back to [`PRIVATE_MOZILLIAN`]. Groups are handled separately because they
/// need the group repository.
pub fn merge_record(profile: &mut MozillianProfile, record: &DirectoryRecord) {
    if let Some(country) = &record.country {
        profile.country = normalize_country(country);
    }
    profile.full_name = record
        .full_name
        .clone()
        .unwrap_or_else(|| PRIVATE_MOZILLIAN.to_string());
    if let Some(email) = &record.email {
        profile.email = email.clone();
    }
    if let Some(city) = &record.city {
        profile.city = city.clone();
    }
    if let Some(ircname) = &record.ircname {
        profile.ircname = ircname.clone();
    }
    if let Some(photo) = &record.photo {
        profile.avatar_url = photo.clone();
    }
    if let Some(bio) = &record.bio {
        profile.bio = bio.clone();
    }
}
