//! Error types for the launchpad library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{SiteStatus, StepStatus};

/// Comprehensive error type for all deployment operations.
///
/// The malformed-input and rule-violation variants render exactly the
/// message that should be shown to the person who submitted the page, so
/// callers can forward `to_string()` as the rejection reason.
#[derive(Error, Debug)]
pub enum DeploymentError {
    /// A serialized value could not be read in the expected shape
    #[error("{message}")]
    MalformedInput { field: String, message: String },
    /// A well-formed value broke a business rule
    #[error("{message}")]
    RuleViolation { field: String, message: String },
    /// A step was started or finished ahead of a catalog predecessor
    #[error(
        "Step progression error: Cannot mark '{step}' as {status} before '{predecessor}' is completed"
    )]
    Progression {
        step: String,
        status: StepStatus,
        predecessor: String,
    },
    /// The site is not in a state that allows it to go live
    #[error(
        "Deployment must be completed before going live. All deployment steps must be finished. Current site status: {current}. Required status: deployed"
    )]
    NotDeployed { current: SiteStatus },
    /// Site not found for the given ID
    #[error("Site with ID {id} not found")]
    SiteNotFound { id: u64 },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid configuration or command input
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> DeploymentError {
        DeploymentError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> DeploymentError {
        DeploymentError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl DeploymentError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a malformed-input error for a page field.
    pub fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a rule-violation error for a page field.
    pub fn violation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RuleViolation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true when the error rejects submitted page content rather than
    /// reporting an infrastructure failure.
    ///
    /// Front ends map rejections to a client-facing 400-class response.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput { .. }
                | Self::RuleViolation { .. }
                | Self::Progression { .. }
                | Self::NotDeployed { .. }
        )
    }

    /// Name of the page field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedInput { field, .. }
            | Self::RuleViolation { field, .. }
            | Self::InvalidInput { field, .. } => Some(field),
            Self::Progression { .. } => Some("steps"),
            _ => None,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DeploymentError::database(message).with_source(e))
    }
}

/// Result type alias for deployment operations
pub type Result<T> = std::result::Result<T, DeploymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_render_bare_message() {
        let err = DeploymentError::violation("progress", "progress must be a number");
        assert_eq!(err.to_string(), "progress must be a number");
        assert_eq!(err.field(), Some("progress"));
        assert!(err.is_rejection());
    }

    #[test]
    fn test_progression_message_names_both_steps() {
        let err = DeploymentError::Progression {
            step: "Network Setup".to_string(),
            status: StepStatus::InProgress,
            predecessor: "Software Installation".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Step progression error: Cannot mark 'Network Setup' as in_progress before 'Software Installation' is completed"
        );
    }

    #[test]
    fn test_infrastructure_errors_are_not_rejections() {
        let err = DeploymentError::SiteNotFound { id: 7 };
        assert!(!err.is_rejection());
        assert_eq!(err.to_string(), "Site with ID 7 not found");

        let err = DeploymentError::invalid_input("catalog").with_reason("empty");
        assert!(!err.is_rejection());
        assert_eq!(err.to_string(), "Invalid input for field 'catalog': empty");
    }
}
