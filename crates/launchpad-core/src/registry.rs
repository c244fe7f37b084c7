//! Access to the externally owned site records.

use crate::{
    error::Result,
    models::{Site, SiteStatus},
};

/// The two site operations deployment processing relies on.
///
/// Implementations do not manage transactions on behalf of the page
/// processor; whatever they write is committed by the caller's request.
pub trait SiteRegistry {
    /// Looks up a site by ID.
    fn find_site(&self, id: u64) -> Result<Option<Site>>;

    /// Sets the status of an existing site.
    ///
    /// # Errors
    ///
    /// Returns `DeploymentError::SiteNotFound` if no site has this ID.
    fn set_site_status(&self, id: u64, status: SiteStatus) -> Result<()>;
}

impl<R: SiteRegistry + ?Sized> SiteRegistry for &R {
    fn find_site(&self, id: u64) -> Result<Option<Site>> {
        (**self).find_site(id)
    }

    fn set_site_status(&self, id: u64, status: SiteStatus) -> Result<()> {
        (**self).set_site_status(id, status)
    }
}
