//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data types stay plain. All
//! output is markdown meant for the terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    catalog::CatalogStep,
    models::{Note, Site, SiteStatus, Step, StepStatus},
};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} ({})",
            self.display_name(),
            self.status.with_icon()
        )?;
        writeln!(f)?;

        match self.actual_hours {
            Some(actual) => writeln!(
                f,
                "- Hours: {actual} of {} estimated",
                self.estimated_hours
            )?,
            None => writeln!(f, "- Estimated hours: {}", self.estimated_hours)?,
        }

        if self.is_completed() {
            if let Some(at) = &self.completed_at {
                match &self.completed_by {
                    Some(by) => writeln!(f, "- Completed: {at} by {by}")?,
                    None => writeln!(f, "- Completed: {at}")?,
                }
            }
        }

        if let Some(receipt) = &self.delivery_receipt {
            writeln!(f, "- Delivery receipt: {receipt}")?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        writeln!(f)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** ({}): {}", self.author, self.timestamp, self.content)
    }
}

impl fmt::Display for CatalogStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` {} ({}h)", self.id, self.name, self.estimated_hours)?;
        if self.requires_receipt {
            write!(f, ", receipt required")?;
        }
        writeln!(f)
    }
}
