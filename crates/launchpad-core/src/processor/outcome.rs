//! Results of processing a deployment page update.

use std::fmt;

use crate::models::PageDocument;

/// A page update that was accepted, plus what happened around it.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// The document to persist
    pub document: PageDocument,

    /// Completion percentage computed from the checklist, when one was
    /// present
    pub progress: Option<u8>,

    /// The site was marked `deployed` during this update
    pub site_deployed: bool,

    /// Set when every step was completed but the site could not be marked
    /// `deployed`. The update itself still stands.
    pub warning: Option<SiteStatusWarning>,
}

impl UpdateOutcome {
    /// An outcome for a document that needed no processing.
    pub fn unchanged(document: PageDocument) -> Self {
        Self {
            document,
            progress: None,
            site_deployed: false,
            warning: None,
        }
    }
}

/// Why a completed deployment did not flip its site to `deployed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteStatusWarning {
    pub site_id: u64,
    pub message: String,
}

impl fmt::Display for SiteStatusWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error updating status of site {}: {}",
            self.site_id, self.message
        )
    }
}
