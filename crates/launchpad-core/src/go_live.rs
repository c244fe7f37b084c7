//! Go-live prerequisite: only fully deployed sites may go live.

use log::info;

use crate::{
    error::{DeploymentError, Result},
    models::{Site, SiteStatus},
    registry::SiteRegistry,
};

/// Fails unless every deployment step has been finished, i.e. the site is
/// `deployed`.
pub fn ensure_ready_for_go_live(site: &Site) -> Result<()> {
    if site.status == SiteStatus::Deployed {
        Ok(())
    } else {
        Err(DeploymentError::NotDeployed {
            current: site.status,
        })
    }
}

/// Runs the go-live check and marks the site `live`.
///
/// Returns the site as it was before the transition.
pub fn mark_site_live<R: SiteRegistry>(registry: &R, site_id: u64) -> Result<Site> {
    let site = registry
        .find_site(site_id)?
        .ok_or(DeploymentError::SiteNotFound { id: site_id })?;

    ensure_ready_for_go_live(&site)?;
    registry.set_site_status(site_id, SiteStatus::Live)?;
    info!("Site {} ({}) is now live", site.id, site.name);

    Ok(site)
}
