//! Page document model: named sections holding named string fields.
//!
//! Pages are owned and persisted by the surrounding application. This crate
//! only reads and rewrites them, so every type keeps attributes it does not
//! know about in an `extra` map and serializes them back untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A form page submitted for a site, e.g. the `deployment` page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageDocument {
    pub page_name: String,

    #[serde(default)]
    pub sections: Vec<Section>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named group of fields within a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub section_name: String,

    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single named value. Lists are stored as JSON text, scalars as plain
/// text; a missing value is kept distinct from an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Field {
    pub field_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_value: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PageDocument {
    pub fn new(page_name: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            ..Self::default()
        }
    }

    /// Adds a section, builder style.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// First section with the given name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.section_name == name)
    }

    /// Mutable access to the first section with the given name.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.section_name == name)
    }

    /// Value of `field` inside `section`, if both exist and a value is set.
    pub fn field_value(&self, section: &str, field: &str) -> Option<&str> {
        self.section(section)
            .and_then(|s| s.field(field))
            .and_then(Field::value)
    }
}

impl Section {
    pub fn new(section_name: impl Into<String>) -> Self {
        Self {
            section_name: section_name.into(),
            ..Self::default()
        }
    }

    /// Adds a field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    /// First field with the given name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_name == name)
    }

    /// Mutable access to the first field with the given name.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.field_name == name)
    }

    /// Sets the value of the named field, appending the field when absent.
    pub fn upsert_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.field_mut(name) {
            Some(field) => field.field_value = Some(value),
            None => self.fields.push(Field::new(name, value)),
        }
    }
}

impl Field {
    pub fn new(field_name: impl Into<String>, field_value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            field_value: Some(field_value.into()),
            extra: Map::new(),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.field_value.as_deref()
    }
}
