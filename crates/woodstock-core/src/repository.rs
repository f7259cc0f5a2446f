//! Repository trait re-exports.
//!
//! This module provides centralized access to all repository traits.

pub use crate::event::EventRepository;
pub use crate::group::GroupRepository;
pub use crate::migration::MigrationLedger;
pub use crate::profile::ProfileRepository;
