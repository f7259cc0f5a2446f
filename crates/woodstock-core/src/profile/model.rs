//! MozillianProfile domain model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Full name stored when the directory hides a member's name.
pub const PRIVATE_MOZILLIAN: &str = "Private Mozillian";

/// Public profile page prefix on the Reps portal.
pub const REPS_PROFILE_URL: &str = "https://reps.mozilla.org/u/";

/// A tracked community member.
///
/// Records are created outside the sync services; the services only ever
/// overwrite fields on records that already exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MozillianProfile {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Unique email, the primary lookup key
    pub email: String,
    /// Username on mozillians.org, the fallback lookup key
    #[serde(default)]
    pub mozillian_username: String,
    #[serde(default)]
    pub full_name: String,
    /// Country display name, already normalized
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    /// IRC nickname
    #[serde(default)]
    pub ircname: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: String,
    /// Display name on the Reps portal, empty for non-Reps
    #[serde(default)]
    pub reps_display_name: String,
    /// Ids of the groups this member belongs to
    #[serde(default)]
    pub tracking_groups: BTreeSet<String>,
}

impl MozillianProfile {
    /// Creates a new profile with only its lookup keys set.
    pub fn new(email: impl Into<String>, mozillian_username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            mozillian_username: mozillian_username.into(),
            full_name: String::new(),
            country: String::new(),
            city: String::new(),
            ircname: String::new(),
            avatar_url: String::new(),
            bio: String::new(),
            reps_display_name: String::new(),
            tracking_groups: BTreeSet::new(),
        }
    }

    /// Replaces the whole group set. Duplicate ids collapse.
    pub fn set_groups<I>(&mut self, group_ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.tracking_groups = group_ids.into_iter().collect();
    }

    /// Returns the member's page on the Reps portal, if they are a Rep.
    pub fn reps_profile_url(&self) -> Option<String> {
        if self.reps_display_name.is_empty() {
            return None;
        }
        Some(format!("{}{}/", REPS_PROFILE_URL, self.reps_display_name))
    }
}
