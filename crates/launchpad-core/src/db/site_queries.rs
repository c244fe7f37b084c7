//! Site CRUD operations and queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, DeploymentError, Result},
    models::{Site, SiteStatus},
    registry::SiteRegistry,
};

const INSERT_SITE_SQL: &str =
    "INSERT INTO sites (name, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_SITE_SQL: &str =
    "SELECT id, name, status, created_at, updated_at FROM sites WHERE id = ?1";
const SELECT_SITES_SQL: &str =
    "SELECT id, name, status, created_at, updated_at FROM sites ORDER BY id";
const UPDATE_SITE_STATUS_SQL: &str = "UPDATE sites SET status = ?1, updated_at = ?2 WHERE id = ?3";

impl super::Database {
    /// Helper function to construct a Site from a database row
    fn build_site_from_row(row: &rusqlite::Row) -> rusqlite::Result<Site> {
        let status_str: String = row.get(2)?;
        let status = status_str.parse::<SiteStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                format!("Invalid site status: {status_str}").into(),
            )
        })?;

        Ok(Site {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            status,
            created_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Registers a new site with the given name and starting status.
    pub fn create_site(&mut self, name: &str, status: SiteStatus) -> Result<Site> {
        if name.trim().is_empty() {
            return Err(
                DeploymentError::invalid_input("name").with_reason("Site name cannot be empty")
            );
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_SITE_SQL,
            params![name, status.as_str(), &now_str, &now_str],
        )
        .db_context("Failed to insert site")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Site {
            id,
            name: name.to_string(),
            status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a site by its ID.
    pub fn get_site(&self, id: u64) -> Result<Option<Site>> {
        self.connection
            .query_row(SELECT_SITE_SQL, params![id as i64], Self::build_site_from_row)
            .optional()
            .db_context("Failed to query site")
    }

    /// Lists all sites in registration order.
    pub fn list_sites(&self) -> Result<Vec<Site>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SITES_SQL)
            .db_context("Failed to prepare query")?;

        let sites = stmt
            .query_map([], Self::build_site_from_row)
            .db_context("Failed to query sites")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read site rows")?;

        Ok(sites)
    }

    /// Sets the status of a site and bumps its `updated_at`.
    pub fn update_site_status(&self, id: u64, status: SiteStatus) -> Result<()> {
        let now_str = Timestamp::now().to_string();
        let rows = self
            .connection
            .execute(
                UPDATE_SITE_STATUS_SQL,
                params![status.as_str(), &now_str, id as i64],
            )
            .db_context("Failed to update site status")?;

        if rows == 0 {
            return Err(DeploymentError::SiteNotFound { id });
        }

        debug!("Site {id} status set to {}", status.as_str());
        Ok(())
    }
}

impl SiteRegistry for super::Database {
    fn find_site(&self, id: u64) -> Result<Option<Site>> {
        self.get_site(id)
    }

    fn set_site_status(&self, id: u64, status: SiteStatus) -> Result<()> {
        self.update_site_status(id, status)
    }
}
