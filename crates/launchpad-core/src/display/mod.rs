//! Display formatting for models and command results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as checklist progress or empty-list
//! handling. Everything renders as markdown for the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │  (Step, Site)   │───▶│ (report, status)│───▶│     output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use launchpad_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Site 3 is now live");
//! assert_eq!(status.to_string(), "Success: Site 3 is now live\n");
//! ```

pub mod datetime;
pub mod models;
pub mod report;
pub mod status;

pub use datetime::LocalDateTime;
pub use report::{ChecklistReport, Sites};
pub use status::OperationStatus;
