//! Application layer for Woodstock.
//!
//! Sync use cases that pull member data from the Mozillians and Reps
//! directories into the local profile store.

pub mod profile_enrichment_service;
pub mod reps_sync_service;
pub mod sync_report;

pub use profile_enrichment_service::ProfileEnrichmentService;
pub use reps_sync_service::RepsSyncService;
pub use sync_report::SyncReport;
