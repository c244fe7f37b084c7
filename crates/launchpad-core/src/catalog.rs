//! The catalog of deployment steps and their required order.
//!
//! A [`StepCatalog`] is an immutable value handed to the
//! [`StepValidator`](crate::validator::StepValidator). The standard catalog
//! covers the four stages of an on-site deployment; a replacement can be
//! loaded from a JSON file for sites with a different rollout.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{DeploymentError, Result},
    models::{Step, StepStatus},
};

/// Definition of one catalog step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStep {
    pub id: String,
    pub name: String,
    pub estimated_hours: f64,
    /// Completing this step requires a delivery receipt
    #[serde(default)]
    pub requires_receipt: bool,
}

impl CatalogStep {
    fn new(id: &str, name: &str, estimated_hours: f64, requires_receipt: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            estimated_hours,
            requires_receipt,
        }
    }
}

/// Ordered set of steps every deployment goes through.
#[derive(Debug, Clone, PartialEq)]
pub struct StepCatalog {
    steps: Vec<CatalogStep>,
}

impl StepCatalog {
    /// The standard four-stage deployment.
    pub fn standard() -> Self {
        Self {
            steps: vec![
                CatalogStep::new("hardware_delivery", "Hardware Delivery", 4.0, true),
                CatalogStep::new("software_installation", "Software Installation", 8.0, false),
                CatalogStep::new("network_setup", "Network Setup", 6.0, false),
                CatalogStep::new("system_testing", "System Testing", 4.0, false),
            ],
        }
    }

    /// Builds a catalog from explicit steps.
    ///
    /// # Errors
    ///
    /// Returns `DeploymentError::InvalidInput` if the list is empty, an id is
    /// blank or repeated, or an hour estimate is not a positive number.
    pub fn new(steps: Vec<CatalogStep>) -> Result<Self> {
        if steps.is_empty() {
            return Err(DeploymentError::invalid_input("catalog")
                .with_reason("catalog must define at least one step"));
        }

        let mut seen = HashSet::new();
        for step in &steps {
            if step.id.trim().is_empty() {
                return Err(
                    DeploymentError::invalid_input("catalog").with_reason("step id cannot be empty")
                );
            }
            if !seen.insert(step.id.as_str()) {
                return Err(DeploymentError::invalid_input("catalog")
                    .with_reason(format!("duplicate step id: {}", step.id)));
            }
            if !(step.estimated_hours.is_finite() && step.estimated_hours > 0.0) {
                return Err(DeploymentError::invalid_input("catalog").with_reason(format!(
                    "step {} must have positive estimatedHours",
                    step.id
                )));
            }
        }

        Ok(Self { steps })
    }

    /// Parses a catalog from a JSON array of step definitions.
    pub fn from_json(json: &str) -> Result<Self> {
        let steps: Vec<CatalogStep> = serde_json::from_str(json)?;
        Self::new(steps)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| DeploymentError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    pub fn steps(&self) -> &[CatalogStep] {
        &self.steps
    }

    /// Step ids in the order they must be completed.
    pub fn order(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().map(|s| s.id.as_str())
    }

    /// Position of `id` in the canonical order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&CatalogStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Catalog steps that must be completed before `id` may start.
    ///
    /// Empty for the first step and for ids outside the catalog.
    pub fn predecessors(&self, id: &str) -> &[CatalogStep] {
        match self.position(id) {
            Some(position) => &self.steps[..position],
            None => &[],
        }
    }

    /// A fresh, all-pending step list. Each call returns an independent copy.
    pub fn default_steps(&self) -> Vec<Step> {
        self.steps
            .iter()
            .map(|s| Step::new(s.id.clone(), s.name.clone(), s.estimated_hours))
            .collect()
    }

    /// The default step list in the serialized form stored in page fields.
    pub fn default_steps_json(&self) -> String {
        let steps: Vec<Value> = self
            .steps
            .iter()
            .map(|s| {
                json!({
                    "id": s.id,
                    "name": s.name,
                    "status": StepStatus::Pending.as_str(),
                    "estimatedHours": s.estimated_hours,
                })
            })
            .collect();
        Value::Array(steps).to_string()
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
