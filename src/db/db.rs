//! SQLite connection management.
//!
//! Every command opens one [`Db`] for its whole run. Opening enables foreign
//! key enforcement, which the cascading deletes of a baby's records rely on,
//! and applies any pending schema migration.
//!
//! ## Features
//!
//! - **Data Directory Storage**: the database lives next to `config.json`
//! - **Automatic Migrations**: schema changes are applied on open
//! - **In-Memory Databases**: isolated databases for tests
//! - **Raw Access**: an unmigrated connection for inspecting schema versions

use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// Name of the SQLite file inside the application data directory.
pub const DB_FILE_NAME: &str = "baily.db";

/// An open, migrated database with foreign keys enforced.
pub struct Db {
    /// Underlying connection, borrowed by the repositories
    pub conn: Connection,
}

impl Db {
    /// Opens the database file in the application data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens (or creates) the database at `path` and brings its schema up to date.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or a migration fails. A failed
    /// migration leaves the schema at its previous version.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        Self::prepare(Connection::open(path)?)
    }

    /// Private, migrated database that disappears when dropped.
    pub fn open_in_memory() -> Result<Db> {
        Self::prepare(Connection::open_in_memory()?)
    }

    /// Raw connection to the application database, migrations not applied.
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Ok(Connection::open(db_file_path)?)
    }

    fn prepare(mut conn: Connection) -> Result<Db> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
