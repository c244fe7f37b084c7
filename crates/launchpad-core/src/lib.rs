//! Core library for validating site deployment pages.
//!
//! A deployment page is a form with three sections: a step checklist, the
//! installation details and the testing notes. This crate checks every
//! submitted value, enforces that steps are worked through in catalog order,
//! computes the completion percentage and marks the site `deployed` once
//! every step is done.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use launchpad_core::{
//!     models::{PageDocument, Section},
//!     ProcessorBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let processor = ProcessorBuilder::new()
//!     .with_database_path(Some("sites.db"))
//!     .build()?;
//!
//! // New pages get the default checklist
//! let page = processor.on_create(
//!     PageDocument::new("deployment")
//!         .with_section(Section::new("deployment_checklist").with_field("steps", ""))
//!         .with_section(Section::new("installation")),
//! );
//!
//! let outcome = processor.on_update(page, 1)?;
//! println!("Progress: {:?}", outcome.progress);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod dates;
pub mod db;
pub mod display;
pub mod error;
pub mod go_live;
pub mod models;
pub mod processor;
pub mod progress;
pub mod registry;
pub mod validator;

// Re-export commonly used types
pub use catalog::{CatalogStep, StepCatalog};
pub use db::Database;
pub use display::{ChecklistReport, LocalDateTime, OperationStatus, Sites};
pub use error::{DeploymentError, Result};
pub use go_live::{ensure_ready_for_go_live, mark_site_live};
pub use models::{Field, Note, PageDocument, Section, Site, SiteStatus, Step, StepStatus};
pub use processor::{DeploymentPageProcessor, ProcessorBuilder, SiteStatusWarning, UpdateOutcome};
pub use registry::SiteRegistry;
pub use validator::StepValidator;
