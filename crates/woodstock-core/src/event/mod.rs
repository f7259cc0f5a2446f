//! Event domain module.
//!
//! Events are plain named entities; the seed migration creates the initial set.

mod model;
mod repository;

pub use model::Event;
pub use repository::EventRepository;
