//! Mozillian group domain module.

mod model;
mod repository;

pub use model::MozillianGroup;
pub use repository::GroupRepository;
