//! Mozillian profile domain module.
//!
//! # Module Structure
//!
//! - `model`: Tracked profile record
//! - `repository`: Profile persistence trait

mod model;
mod repository;

pub use model::{MozillianProfile, PRIVATE_MOZILLIAN, REPS_PROFILE_URL};
pub use repository::ProfileRepository;
