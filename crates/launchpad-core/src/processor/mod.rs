//! Processing of deployment pages on create and update.
//!
//! The [`DeploymentPageProcessor`] is the entry point the page controller
//! calls before persisting a page. It only acts on pages named
//! `deployment`; every other page passes through untouched.
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │  Page document   │    │    Validators    │    │  Site registry   │
//! │ (sections/fields)│───▶│ (steps, fields,  │───▶│ (status flip on  │
//! │                  │    │  notes, progress)│    │  full completion)│
//! └──────────────────┘    └──────────────────┘    └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use launchpad_core::{models::PageDocument, ProcessorBuilder};
//!
//! # fn example(page: PageDocument) -> Result<(), Box<dyn std::error::Error>> {
//! let processor = ProcessorBuilder::new()
//!     .with_database_path(Some("launchpad.db"))
//!     .build()?;
//!
//! let outcome = processor.on_update(page, 42)?;
//! if let Some(warning) = &outcome.warning {
//!     eprintln!("{warning}");
//! }
//! # Ok(())
//! # }
//! ```

use log::{debug, info, warn};

use crate::{
    catalog::StepCatalog,
    error::Result,
    models::{PageDocument, SiteStatus, Step},
    progress::{all_completed, calculate_progress},
    registry::SiteRegistry,
    validator::{
        fields::{
            validate_installation_section, validate_notes_field, NOTES_FIELD, PROGRESS_FIELD,
        },
        StepValidator, STEPS_FIELD,
    },
};

pub mod builder;
pub mod outcome;


pub use builder::ProcessorBuilder;
pub use outcome::{SiteStatusWarning, UpdateOutcome};

/// Page name handled by the processor.
pub const DEPLOYMENT_PAGE: &str = "deployment";
/// Section holding the serialized step list.
pub const CHECKLIST_SECTION: &str = "deployment_checklist";
/// Section holding engineer, dates and progress.
pub const INSTALLATION_SECTION: &str = "installation";
/// Section holding the testing notes.
pub const TESTING_SECTION: &str = "testing";

/// Validates deployment pages and propagates completion to the site.
pub struct DeploymentPageProcessor<R> {
    validator: StepValidator,
    registry: R,
}

impl<R: SiteRegistry> DeploymentPageProcessor<R> {
    pub fn new(catalog: StepCatalog, registry: R) -> Self {
        Self {
            validator: StepValidator::new(catalog),
            registry,
        }
    }

    pub fn validator(&self) -> &StepValidator {
        &self.validator
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Seeds the checklist of a new deployment page with the default steps
    /// when it arrives empty.
    pub fn on_create(&self, mut page: PageDocument) -> PageDocument {
        if page.page_name != DEPLOYMENT_PAGE {
            return page;
        }

        if let Some(field) = page
            .section_mut(CHECKLIST_SECTION)
            .and_then(|section| section.field_mut(STEPS_FIELD))
        {
            field.field_value = Some(self.validator.normalize_or_default(field.value()));
            debug!("Initialized deployment checklist on page creation");
        }

        page
    }

    /// Validates an updated deployment page and returns the document to
    /// persist.
    ///
    /// Sections are checked in document order and the first failure rejects
    /// the whole update. On success the checklist progress is written into
    /// every installation section, and a fully completed checklist marks the
    /// site `deployed`. Failing to update the site does not fail the page;
    /// it is reported through [`UpdateOutcome::warning`].
    ///
    /// # Errors
    ///
    /// Returns the validation error of the first invalid step list,
    /// installation field or notes list.
    pub fn on_update(&self, mut page: PageDocument, site_id: u64) -> Result<UpdateOutcome> {
        if page.page_name != DEPLOYMENT_PAGE {
            return Ok(UpdateOutcome::unchanged(page));
        }

        let mut checklist: Option<Vec<Step>> = None;

        for section in &mut page.sections {
            match section.section_name.as_str() {
                CHECKLIST_SECTION => {
                    for field in section
                        .fields
                        .iter_mut()
                        .filter(|f| f.field_name == STEPS_FIELD)
                    {
                        let normalized = self.validator.normalize_or_default(field.value());
                        let steps = self.validator.validate_all(&normalized)?;
                        field.field_value = Some(normalized);
                        checklist = Some(steps);
                    }
                }
                INSTALLATION_SECTION => validate_installation_section(section)?,
                TESTING_SECTION => {
                    for field in section.fields.iter().filter(|f| f.field_name == NOTES_FIELD) {
                        validate_notes_field(field)?;
                    }
                }
                _ => {}
            }
        }

        let Some(steps) = checklist else {
            debug!("Deployment page for site {site_id} has no checklist; progress unchanged");
            return Ok(UpdateOutcome::unchanged(page));
        };

        let progress = calculate_progress(&steps);
        for section in page
            .sections
            .iter_mut()
            .filter(|s| s.section_name == INSTALLATION_SECTION)
        {
            section.upsert_field(PROGRESS_FIELD, progress.to_string());
        }
        debug!("Deployment progress for site {site_id}: {progress}%");

        let mut outcome = UpdateOutcome {
            document: page,
            progress: Some(progress),
            site_deployed: false,
            warning: None,
        };

        if all_completed(&steps) {
            match self.mark_site_deployed(site_id) {
                Ok(()) => outcome.site_deployed = true,
                Err(warning) => {
                    warn!("{warning}");
                    outcome.warning = Some(warning);
                }
            }
        }

        Ok(outcome)
    }

    fn mark_site_deployed(&self, site_id: u64) -> std::result::Result<(), SiteStatusWarning> {
        let warning = |message: String| SiteStatusWarning { site_id, message };

        let site = self
            .registry
            .find_site(site_id)
            .map_err(|e| warning(e.to_string()))?
            .ok_or_else(|| warning(format!("Site with ID {site_id} not found")))?;

        self.registry
            .set_site_status(site.id, SiteStatus::Deployed)
            .map_err(|e| warning(e.to_string()))?;

        info!("All deployment steps completed; site {} marked deployed", site.id);
        Ok(())
    }
}
