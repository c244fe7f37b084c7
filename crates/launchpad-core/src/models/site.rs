//! Site model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::SiteStatus;

/// A site being provisioned. Only `status` is driven by deployment pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Site {
    /// Unique identifier for the site
    pub id: u64,

    /// Display name of the site
    pub name: String,

    /// Lifecycle status
    #[serde(default)]
    pub status: SiteStatus,

    /// Timestamp when the site was registered (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last status change (UTC)
    pub updated_at: Timestamp,
}
