//! Validation of deployment step lists and installation/testing fields.
//!
//! [`StepValidator`] checks the serialized checklist stored in the
//! `deployment_checklist` section: the shape of each step and the rule that
//! no step may start before its catalog predecessors are completed. The
//! [`fields`] submodule covers the free-form installation and testing
//! fields. Every check reports the first problem it finds.
//!
//! ```rust
//! use launchpad_core::{StepCatalog, StepValidator};
//!
//! let validator = StepValidator::new(StepCatalog::standard());
//!
//! let steps = validator.normalize_or_default(None);
//! let parsed = validator.validate_all(&steps)?;
//! assert_eq!(parsed.len(), 4);
//!
//! let err = validator
//!     .validate_all(r#"[{"id": "x", "name": "X", "status": "done", "estimatedHours": 1}]"#)
//!     .unwrap_err();
//! assert!(err.to_string().starts_with("Invalid status: done"));
//! # Ok::<(), launchpad_core::DeploymentError>(())
//! ```

use serde_json::{Map, Value};

use crate::{
    catalog::StepCatalog,
    dates::is_iso8601,
    error::{DeploymentError, Result},
    models::{Step, StepStatus},
};

pub mod fields;
mod values;


pub use fields::{
    validate_installation_field, validate_installation_section, validate_notes,
    validate_notes_field, InstallationContext,
};

/// Name of the page field holding the serialized step list.
pub const STEPS_FIELD: &str = "steps";

const REQUIRED_STEP_KEYS: [&str; 4] = ["id", "name", "status", "estimatedHours"];

/// Keys read into dedicated [`Step`] fields; all others land in `extra`.
const MODELED_STEP_KEYS: [&str; 9] = [
    "id",
    "name",
    "status",
    "estimatedHours",
    "actualHours",
    "completedAt",
    "completedBy",
    "notes",
    "deliveryReceipt",
];

/// Validates deployment checklists against a step catalog.
#[derive(Debug, Clone, Default)]
pub struct StepValidator {
    catalog: StepCatalog,
}

impl StepValidator {
    pub fn new(catalog: StepCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    /// Returns `raw` unchanged when it is a non-empty JSON array, otherwise
    /// the serialized default step list.
    pub fn normalize_or_default(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return self.catalog.default_steps_json();
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) if !items.is_empty() => raw.to_string(),
            _ => self.catalog.default_steps_json(),
        }
    }

    /// Checks one step object and returns its typed form.
    ///
    /// # Errors
    ///
    /// Returns `DeploymentError::RuleViolation` for a missing required key,
    /// an unknown status, a non-positive `estimatedHours`, a negative
    /// `actualHours`, an unparseable `completedAt`, or a completed
    /// receipt-gated step without a `deliveryReceipt`.
    pub fn validate_step(&self, raw: &Map<String, Value>) -> Result<Step> {
        if let Some(missing) = REQUIRED_STEP_KEYS.iter().find(|k| !raw.contains_key(**k)) {
            return Err(step_error(format!("Step missing required field: {missing}")));
        }

        let status = raw["status"]
            .as_str()
            .and_then(|s| s.parse::<StepStatus>().ok())
            .ok_or_else(|| {
                let allowed: Vec<&str> = StepStatus::ALL.iter().map(StepStatus::as_str).collect();
                step_error(format!(
                    "Invalid status: {}. Must be one of {}",
                    values::to_text(&raw["status"]),
                    allowed.join(", ")
                ))
            })?;

        let estimated_hours = values::as_number(&raw["estimatedHours"])
            .ok_or_else(|| step_error("estimatedHours must be a number"))?;
        if estimated_hours <= 0.0 {
            return Err(step_error("estimatedHours must be a positive number"));
        }

        let actual_hours = match raw.get("actualHours").filter(|v| !v.is_null()) {
            Some(value) => {
                let hours = values::as_number(value)
                    .ok_or_else(|| step_error("actualHours must be a number"))?;
                if hours < 0.0 {
                    return Err(step_error("actualHours must be a non-negative number"));
                }
                Some(hours)
            }
            None => None,
        };

        let completed_at = match raw.get("completedAt").filter(|v| values::is_truthy(v)) {
            Some(Value::String(s)) if is_iso8601(s) => Some(s.clone()),
            Some(_) => return Err(step_error("completedAt must be a valid ISO date string")),
            None => None,
        };

        let id = values::to_text(&raw["id"]);
        let delivery_receipt = values::to_optional_text(raw.get("deliveryReceipt"));
        let requires_receipt = self.catalog.get(&id).is_some_and(|c| c.requires_receipt);
        if requires_receipt && status == StepStatus::Completed && delivery_receipt.is_none() {
            return Err(step_error(format!(
                "{id} step requires deliveryReceipt when status is 'completed'"
            )));
        }

        let extra = raw
            .iter()
            .filter(|(key, _)| !MODELED_STEP_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Step {
            id,
            name: values::to_text(&raw["name"]),
            status,
            estimated_hours,
            actual_hours,
            completed_at,
            completed_by: values::to_optional_text(raw.get("completedBy")),
            notes: values::to_optional_text(raw.get("notes")),
            delivery_receipt,
            extra,
        })
    }

    /// Checks that no step is in progress or completed while a catalog
    /// predecessor in the same list is not completed.
    ///
    /// A predecessor is judged by its status anywhere in the list, so its
    /// position relative to the step does not matter. Predecessors missing
    /// from the list do not block, and ids outside the catalog are skipped.
    pub fn validate_progression(&self, steps: &[Step]) -> Result<()> {
        let mut completed: Vec<&str> = Vec::new();

        for step in steps {
            if self.catalog.position(&step.id).is_none() {
                continue;
            }

            if step.status.requires_predecessors() {
                for predecessor in self.catalog.predecessors(&step.id) {
                    if completed.contains(&predecessor.id.as_str()) {
                        continue;
                    }
                    let blocking = steps
                        .iter()
                        .find(|s| s.id == predecessor.id)
                        .filter(|s| !s.is_completed());
                    if let Some(blocking) = blocking {
                        return Err(DeploymentError::Progression {
                            step: step.display_name().to_string(),
                            status: step.status,
                            predecessor: blocking.display_name().to_string(),
                        });
                    }
                }
            }

            if step.is_completed() {
                completed.push(&step.id);
            }
        }

        Ok(())
    }

    /// Parses a serialized step list and runs every step and progression
    /// check, returning the typed steps on success.
    pub fn validate_all(&self, serialized: &str) -> Result<Vec<Step>> {
        let value: Value = serde_json::from_str(serialized).map_err(|_| {
            DeploymentError::malformed(
                STEPS_FIELD,
                "Invalid steps field: must be a valid JSON array",
            )
        })?;
        let Value::Array(items) = value else {
            return Err(DeploymentError::malformed(
                STEPS_FIELD,
                "Invalid steps field: must be a JSON array",
            ));
        };

        let mut steps = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let Value::Object(raw) = item else {
                return Err(DeploymentError::malformed(
                    STEPS_FIELD,
                    format!("Invalid step at index {index}: must be an object"),
                ));
            };
            steps.push(self.validate_step(raw)?);
        }

        self.validate_progression(&steps)?;
        Ok(steps)
    }
}

fn step_error(message: impl Into<String>) -> DeploymentError {
    DeploymentError::violation(STEPS_FIELD, message)
}
