//! JSON-file record store.
//!
//! Holds every profile, group, event and applied migration in one JSON
//! document. Each repository call is its own locked read-modify-write, so a
//! crash mid-batch keeps every record written so far.
//!
//! File location: `~/.local/share/woodstock/store.json` unless overridden.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use woodstock_core::error::Result;
use woodstock_core::event::Event;
use woodstock_core::group::MozillianGroup;
use woodstock_core::migration::AppliedMigration;
use woodstock_core::profile::MozillianProfile;

use crate::paths::WoodstockPaths;
use crate::storage::AtomicJsonFile;

/// On-disk layout of the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub profiles: Vec<MozillianProfile>,
    #[serde(default)]
    pub groups: Vec<MozillianGroup>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub migrations: Vec<AppliedMigration>,
}

/// Record store backed by a single JSON file.
///
/// Implements `ProfileRepository`, `GroupRepository`, `EventRepository` and
/// `MigrationLedger`.
pub struct JsonRecordStore {
    file: AtomicJsonFile<StoreDocument>,
}

impl JsonRecordStore {
    /// Opens the store at the default data path.
    pub fn new_default() -> Result<Self> {
        Ok(Self::with_path(WoodstockPaths::store_file()?))
    }

    /// Opens the store at a custom path (for testing or `--store`).
    ///
    /// The file is created lazily on the first write.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Reads the whole document; a missing file reads as empty.
    pub(crate) fn read(&self) -> Result<StoreDocument> {
        Ok(self.file.load()?.unwrap_or_default())
    }

    /// Runs `f` against the document under the file lock and persists it.
    pub(crate) fn write<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut StoreDocument) -> Result<R>,
    {
        Ok(self.file.update(StoreDocument::default(), f)?)
    }
}
