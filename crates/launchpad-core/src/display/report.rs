//! Wrapper types for displaying checklists and site collections.

use std::fmt;

use crate::{
    models::{Note, Site, Step},
    progress::calculate_progress,
};

/// A deployment checklist with its progress and the testing notes.
///
/// # Examples
///
/// ```rust
/// use launchpad_core::{display::ChecklistReport, StepCatalog, StepStatus};
///
/// let mut steps = StepCatalog::standard().default_steps();
/// steps[0].status = StepStatus::Completed;
///
/// let output = ChecklistReport::new(steps).to_string();
/// assert!(output.contains("1/4 steps completed (25%)"));
/// assert!(output.contains("### Hardware Delivery (✓ Completed)"));
/// ```
pub struct ChecklistReport {
    pub steps: Vec<Step>,
    pub notes: Vec<Note>,
}

impl ChecklistReport {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            notes: Vec::new(),
        }
    }

    /// Adds testing notes to the report.
    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn progress(&self) -> u8 {
        calculate_progress(&self.steps)
    }
}

impl fmt::Display for ChecklistReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let completed = self.steps.iter().filter(|s| s.is_completed()).count();
        writeln!(f, "# Deployment checklist")?;
        writeln!(f)?;
        writeln!(
            f,
            "{completed}/{} steps completed ({}%)",
            self.steps.len(),
            self.progress()
        )?;
        writeln!(f)?;

        for step in &self.steps {
            write!(f, "{step}")?;
        }

        if !self.notes.is_empty() {
            writeln!(f, "## Testing notes")?;
            writeln!(f)?;
            for note in &self.notes {
                write!(f, "{note}")?;
            }
        }

        Ok(())
    }
}

/// Newtype wrapper for displaying a list of sites.
pub struct Sites(pub Vec<Site>);

impl Sites {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Sites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No sites found.");
        }
        for site in &self.0 {
            writeln!(f, "- **{}** (ID: {}): {}", site.name, site.id, site.status)?;
        }
        Ok(())
    }
}
