//! Status enumerations for deployment steps and sites.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of deployment step statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Step has not been started
    #[default]
    Pending,

    /// Step is being worked on
    InProgress,

    /// Step has been finished
    Completed,

    /// Step cannot proceed until an outside issue is resolved
    Blocked,
}

impl StepStatus {
    /// Every accepted status, in the order shown to users.
    pub const ALL: [StepStatus; 4] = [
        StepStatus::Pending,
        StepStatus::InProgress,
        StepStatus::Completed,
        StepStatus::Blocked,
    ];

    /// Wire representation used inside serialized step lists.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::InProgress => "in_progress",
            StepStatus::Completed => "completed",
            StepStatus::Blocked => "blocked",
        }
    }

    /// True for statuses that require every earlier catalog step to be
    /// completed.
    pub fn requires_predecessors(&self) -> bool {
        matches!(self, StepStatus::InProgress | StepStatus::Completed)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use launchpad_core::models::StepStatus;
    ///
    /// assert_eq!(StepStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(StepStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(StepStatus::Pending.with_icon(), "○ Pending");
    /// assert_eq!(StepStatus::Blocked.with_icon(), "✗ Blocked");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Completed => "✓ Completed",
            StepStatus::InProgress => "➤ In Progress",
            StepStatus::Pending => "○ Pending",
            StepStatus::Blocked => "✗ Blocked",
        }
    }
}

/// Parses the exact wire representation; matching is case-sensitive because
/// the stored step lists are.
impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid step status: {s}"))
    }
}

/// Lifecycle status of a site as tracked by the provisioning application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SiteStatus {
    #[default]
    #[serde(rename = "Created")]
    Created,
    #[serde(rename = "site_study_done")]
    SiteStudyDone,
    #[serde(rename = "scoping_done")]
    ScopingDone,
    #[serde(rename = "approved")]
    Approved,
    #[serde(rename = "procurement_done")]
    ProcurementDone,
    #[serde(rename = "deployed")]
    Deployed,
    #[serde(rename = "live")]
    Live,
    #[serde(rename = "archived")]
    Archived,
}

impl SiteStatus {
    /// Every known site status, in lifecycle order.
    pub const ALL: [SiteStatus; 8] = [
        SiteStatus::Created,
        SiteStatus::SiteStudyDone,
        SiteStatus::ScopingDone,
        SiteStatus::Approved,
        SiteStatus::ProcurementDone,
        SiteStatus::Deployed,
        SiteStatus::Live,
        SiteStatus::Archived,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Created => "Created",
            SiteStatus::SiteStudyDone => "site_study_done",
            SiteStatus::ScopingDone => "scoping_done",
            SiteStatus::Approved => "approved",
            SiteStatus::ProcurementDone => "procurement_done",
            SiteStatus::Deployed => "deployed",
            SiteStatus::Live => "live",
            SiteStatus::Archived => "archived",
        }
    }
}

impl FromStr for SiteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SiteStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid site status: {s}"))
    }
}
