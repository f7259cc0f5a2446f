pub mod listing;
pub mod migrate;
pub mod profile;
pub mod sync;
pub mod utils;
