//! SQLite-backed site registry.
//!
//! This module stores the site records that deployment processing reads and
//! updates. It handles the SQLite connection, schema setup, and the site
//! queries behind the [`SiteRegistry`](crate::registry::SiteRegistry) trait.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod site_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
