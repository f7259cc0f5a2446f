//! MozillianGroup domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named community group, unique by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MozillianGroup {
    pub id: String,
    pub name: String,
}

impl MozillianGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }
}
