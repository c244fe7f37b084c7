//! Testing note model definition.

use serde::{Deserialize, Serialize};

/// A remark left by an engineer in the testing section of a deployment page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub author: String,
    pub content: String,
    /// ISO-8601 time the note was written
    pub timestamp: String,
}
