//! Lookup outcome and directory payloads.

use serde::{Deserialize, Serialize};

/// Result of a single lookup strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<T> {
    /// The directory returned a matching object.
    Found(T),
    /// Empty result list, or a non-success status that was already logged.
    NotFound,
}

impl<T> From<Option<T>> for LookupOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Found(value),
            None => Self::NotFound,
        }
    }
}

/// A member object from the Mozillians directory.
///
/// Every field is optional: the directory omits fields the member keeps
/// private. `None` means the key was absent (or `null`), which the merge step
/// treats as "leave the local value alone".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    pub email: Option<String>,
    pub username: Option<String>,
    pub full_name: Option<String>,
    /// ISO 3166-1 alpha-2 code, any case
    pub country: Option<String>,
    pub city: Option<String>,
    pub ircname: Option<String>,
    /// Avatar URL
    pub photo: Option<String>,
    pub bio: Option<String>,
    /// Group names
    pub groups: Option<Vec<String>>,
}

/// A Rep object from the Reps directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRecord {
    pub profile: Option<RepProfile>,
}

/// The nested `profile` object of a Rep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepProfile {
    pub display_name: Option<String>,
}

impl RepRecord {
    /// Returns `profile.display_name` when both levels are present.
    pub fn display_name(&self) -> Option<&str> {
        self.profile.as_ref()?.display_name.as_deref()
    }
}
