//! Remote directory lookups.
//!
//! Each lookup strategy answers with a [`LookupOutcome`] so callers can chain
//! fallbacks explicitly instead of testing for empty payloads.
//!
//! # Module Structure
//!
//! - `model`: Payloads returned by the Mozillians and Reps directories
//! - `service`: Lookup traits implemented by the HTTP clients

mod model;
mod service;

pub use model::{DirectoryRecord, LookupOutcome, RepProfile, RepRecord};
pub use service::{DirectoryLookup, RepsLookup};
