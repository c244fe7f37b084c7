//! Checks for the installation and testing sections of a deployment page.

use serde_json::Value;

use super::values;
use crate::{
    dates::{is_iso8601, parse_calendar_date},
    error::{DeploymentError, Result},
    models::{Field, Note, Section},
};

pub const DEPLOYMENT_ENGINEER_FIELD: &str = "deployment_engineer";
pub const START_DATE_FIELD: &str = "start_date";
pub const TARGET_DATE_FIELD: &str = "target_date";
pub const PROGRESS_FIELD: &str = "progress";
pub const NOTES_FIELD: &str = "notes";

/// Longest accepted engineer name, in characters.
pub const MAX_ENGINEER_NAME_CHARS: usize = 255;

const REQUIRED_NOTE_KEYS: [&str; 4] = ["id", "author", "content", "timestamp"];

/// Sibling values an installation field is checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallationContext {
    pub start_date: Option<String>,
    pub target_date: Option<String>,
}

impl InstallationContext {
    /// Collects the date fields present in an installation section. A
    /// repeated field name resolves to its last occurrence.
    pub fn from_section(section: &Section) -> Self {
        let mut context = Self::default();
        for field in &section.fields {
            let value = field.value().unwrap_or_default().to_string();
            match field.field_name.as_str() {
                START_DATE_FIELD => context.start_date = Some(value),
                TARGET_DATE_FIELD => context.target_date = Some(value),
                _ => {}
            }
        }
        context
    }
}

/// Checks one installation field. Fields without a rule always pass.
///
/// `target_date` is compared against the context's `start_date` only when
/// that start date is itself a valid calendar date.
///
/// ```rust
/// use launchpad_core::validator::{validate_installation_field, InstallationContext};
///
/// let context = InstallationContext {
///     start_date: Some("2024-06-01".to_string()),
///     target_date: None,
/// };
/// assert!(validate_installation_field("target_date", "2024-06-01", &context).is_ok());
/// assert!(validate_installation_field("target_date", "2024-05-01", &context).is_err());
/// ```
pub fn validate_installation_field(
    name: &str,
    value: &str,
    context: &InstallationContext,
) -> Result<()> {
    match name {
        DEPLOYMENT_ENGINEER_FIELD => {
            if value.chars().count() > MAX_ENGINEER_NAME_CHARS {
                return Err(DeploymentError::violation(
                    name,
                    format!("{name} must be {MAX_ENGINEER_NAME_CHARS} characters or less"),
                ));
            }
        }
        START_DATE_FIELD => {
            if !value.is_empty() {
                require_calendar_date(name, value)?;
            }
        }
        TARGET_DATE_FIELD => {
            if !value.is_empty() {
                let target = require_calendar_date(name, value)?;
                let start = context
                    .start_date
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .and_then(parse_calendar_date);
                if start.is_some_and(|start| target < start) {
                    return Err(DeploymentError::violation(
                        name,
                        "target_date must be after start_date",
                    ));
                }
            }
        }
        PROGRESS_FIELD => {
            let progress = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite())
                .ok_or_else(|| DeploymentError::violation(name, "progress must be a number"))?;
            if !(0.0..=100.0).contains(&progress) {
                return Err(DeploymentError::violation(
                    name,
                    "progress must be between 0 and 100",
                ));
            }
        }
        _ => {}
    }
    Ok(())
}

/// Checks every field of an installation section against its siblings.
pub fn validate_installation_section(section: &Section) -> Result<()> {
    let context = InstallationContext::from_section(section);
    section.fields.iter().try_for_each(|field| {
        validate_installation_field(
            &field.field_name,
            field.value().unwrap_or_default(),
            &context,
        )
    })
}

/// Parses and checks the serialized notes list of the testing section.
///
/// # Errors
///
/// Returns `DeploymentError::MalformedInput` when the value is not a JSON
/// array of objects and `DeploymentError::RuleViolation` when a note lacks
/// a required key or carries an unparseable timestamp. Messages name the
/// offending index.
pub fn validate_notes(serialized: &str) -> Result<Vec<Note>> {
    let value: Value = serde_json::from_str(serialized).map_err(|_| {
        DeploymentError::malformed(NOTES_FIELD, "Invalid notes field: must be a valid JSON array")
    })?;
    let Value::Array(items) = value else {
        return Err(DeploymentError::malformed(
            NOTES_FIELD,
            "Invalid notes field: must be a JSON array",
        ));
    };

    let mut notes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(raw) = item else {
            return Err(DeploymentError::malformed(
                NOTES_FIELD,
                format!("Invalid note at index {index}: must be an object"),
            ));
        };

        if let Some(missing) = REQUIRED_NOTE_KEYS.iter().find(|k| !raw.contains_key(**k)) {
            return Err(DeploymentError::violation(
                NOTES_FIELD,
                format!("Note at index {index} missing required field: {missing}"),
            ));
        }

        let timestamp = raw["timestamp"].as_str().filter(|t| is_iso8601(t)).ok_or_else(|| {
            DeploymentError::violation(
                NOTES_FIELD,
                format!("Note at index {index}: timestamp must be a valid ISO date string"),
            )
        })?;

        notes.push(Note {
            id: values::to_text(&raw["id"]),
            author: values::to_text(&raw["author"]),
            content: values::to_text(&raw["content"]),
            timestamp: timestamp.to_string(),
        });
    }

    Ok(notes)
}

/// Reads the notes field of a testing section, treating a missing value as
/// an empty list.
pub fn validate_notes_field(field: &Field) -> Result<Vec<Note>> {
    validate_notes(field.value().unwrap_or("[]"))
}

fn require_calendar_date(name: &str, value: &str) -> Result<jiff::civil::Date> {
    parse_calendar_date(value).ok_or_else(|| {
        DeploymentError::violation(name, format!("{name} must be in YYYY-MM-DD format"))
    })
}
