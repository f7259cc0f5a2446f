pub mod config;
pub mod country;
pub mod error;
pub mod event;
pub mod group;
pub mod lookup;
pub mod migration;
pub mod profile;
pub mod repository;

// Re-export common error type
pub use error::WoodstockError;
