//! Data models for deployment pages, steps, notes and sites.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so formatting stays out of the data types.
//!
//! # Examples
//!
//! ```rust
//! use launchpad_core::models::{PageDocument, Section};
//!
//! let page = PageDocument::new("deployment").with_section(
//!     Section::new("installation").with_field("deployment_engineer", "Dana"),
//! );
//!
//! assert_eq!(
//!     page.field_value("installation", "deployment_engineer"),
//!     Some("Dana")
//! );
//! assert!(page.section("testing").is_none());
//! ```

pub mod note;
pub mod page;
pub mod site;
pub mod status;
pub mod step;


pub use note::Note;
pub use page::{Field, PageDocument, Section};
pub use site::Site;
pub use status::{SiteStatus, StepStatus};
pub use step::Step;
