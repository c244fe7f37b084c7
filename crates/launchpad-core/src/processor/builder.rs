//! Builder for creating and configuring page processor instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::DeploymentPageProcessor;
use crate::{
    catalog::StepCatalog,
    db::Database,
    error::{DeploymentError, Result},
};

/// Builder for a [`DeploymentPageProcessor`] backed by the SQLite site
/// registry.
#[derive(Debug, Clone, Default)]
pub struct ProcessorBuilder {
    database_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    catalog: Option<StepCatalog>,
}

impl ProcessorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/launchpad/launchpad.db` or
    /// `~/.local/share/launchpad/launchpad.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the step catalog from a JSON file instead of the standard one.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already loaded catalog. Takes precedence over a catalog path.
    pub fn with_catalog(mut self, catalog: StepCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Resolves the configured step catalog without opening the database.
    pub fn resolve_catalog(&self) -> Result<StepCatalog> {
        if let Some(catalog) = &self.catalog {
            return Ok(catalog.clone());
        }
        match &self.catalog_path {
            Some(path) => {
                debug!("Loading step catalog from {}", path.display());
                StepCatalog::from_file(path)
            }
            None => Ok(StepCatalog::standard()),
        }
    }

    /// Builds the configured processor.
    ///
    /// # Errors
    ///
    /// Returns `DeploymentError::FileSystem` if the database directory cannot
    /// be created or the catalog file cannot be read
    /// Returns `DeploymentError::Database` if database initialization fails
    pub fn build(self) -> Result<DeploymentPageProcessor<Database>> {
        let catalog = self.resolve_catalog()?;
        let database = self.open_database()?;
        Ok(DeploymentPageProcessor::new(catalog, database))
    }

    /// Opens (and initializes) the configured site database.
    pub fn open_database(&self) -> Result<Database> {
        let db_path = match &self.database_path {
            Some(path) => path.clone(),
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| DeploymentError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening site database at {}", db_path.display());
        Database::new(&db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("launchpad")
            .place_data_file("launchpad.db")
            .map_err(|e| DeploymentError::XdgDirectory(e.to_string()))
    }
}
