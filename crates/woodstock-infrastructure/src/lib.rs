pub mod config_service;
pub mod event_repository;
pub mod group_repository;
pub mod migration;
pub mod migration_ledger;
pub mod paths;
pub mod profile_repository;
pub mod record_store;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::record_store::JsonRecordStore;
