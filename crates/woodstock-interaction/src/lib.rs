//! HTTP clients for the Mozillians and Reps directories.

pub mod api_client;
pub mod mozillians_client;
pub mod reps_client;

pub use api_client::{ApiClient, QueryOutcome};
pub use mozillians_client::MozilliansClient;
pub use reps_client::RepsClient;
