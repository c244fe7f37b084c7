//! Deployment step model definition.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::StepStatus;

/// One entry of a deployment checklist.
///
/// Steps travel as JSON objects embedded in a page field, so the serialized
/// names are camelCase. Keys this type does not model are kept in `extra`
/// and written back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Catalog identifier such as `hardware_delivery`
    pub id: String,

    /// Human-readable step name
    pub name: String,

    /// Current status of the step
    #[serde(default)]
    pub status: StepStatus,

    /// Planned effort in hours (always positive)
    pub estimated_hours: f64,

    /// Effort actually spent, in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f64>,

    /// ISO-8601 completion time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    /// Who marked the step completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,

    /// Free-text remarks on the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Reference to the proof of delivery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_receipt: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Step {
    /// Creates a pending step with no optional metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>, estimated_hours: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: StepStatus::Pending,
            estimated_hours,
            actual_hours: None,
            completed_at: None,
            completed_by: None,
            notes: None,
            delivery_receipt: None,
            extra: Map::new(),
        }
    }

    /// Name used in messages, falling back to the id when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == StepStatus::Completed
    }
}
