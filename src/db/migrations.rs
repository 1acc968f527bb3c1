//! Versioned schema migrations.
//!
//! Applied versions are recorded in the `migrations` table. All pending
//! migrations run in a single transaction, so a failing step leaves the
//! schema at its previous version.
//!
//! ## Versions
//!
//! 1. `create_babies_and_records`: babies, bottles, diapers and sleeps, each
//!    record table referencing its baby with `ON DELETE CASCADE`
//! 2. `add_notifications`: the global notifications table
//!
//! New versions are appended in [`MigrationManager::new`]; released versions
//! are never edited.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    /// Strictly increasing, starting at 1
    version: u32,

    /// Recorded in the `migrations` table and shown by `migrations history`
    name: &'static str,

    /// Schema change, run inside the shared transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Ordered list of every schema migration.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };

        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.add_migration(1, "create_babies_and_records", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS babies (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    created_at TIMESTAMP NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS bottles (
                    id INTEGER PRIMARY KEY,
                    baby_id INTEGER NOT NULL REFERENCES babies(id) ON DELETE CASCADE,
                    time TIMESTAMP NOT NULL,
                    quantity INTEGER NOT NULL CHECK (quantity > 0)
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS diapers (
                    id INTEGER PRIMARY KEY,
                    baby_id INTEGER NOT NULL REFERENCES babies(id) ON DELETE CASCADE,
                    time TIMESTAMP NOT NULL,
                    description TEXT
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS sleeps (
                    id INTEGER PRIMARY KEY,
                    baby_id INTEGER NOT NULL REFERENCES babies(id) ON DELETE CASCADE,
                    start TIMESTAMP NOT NULL,
                    end TIMESTAMP,
                    description TEXT
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_bottles_baby_time ON bottles(baby_id, time)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_diapers_baby_time ON diapers(baby_id, time)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_sleeps_baby_start ON sleeps(baby_id, start)", [])?;

            Ok(())
        });

        self.add_migration(2, "add_notifications", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS notifications (
                    id INTEGER PRIMARY KEY,
                    date TIMESTAMP NOT NULL,
                    title TEXT NOT NULL,
                    description TEXT NOT NULL
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_notifications_date ON notifications(date)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Version the schema reaches once everything is applied.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applies every migration newer than the recorded version.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing migration. Nothing of the
    /// batch is committed in that case.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;

        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version, 0 on a fresh database.
    pub fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        if !has_migrations_table(conn)? {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// `(version, name, applied_at)` in version order.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        if !has_migrations_table(conn)? {
            return Ok(Vec::new());
        }

        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

fn has_migrations_table(conn: &Connection) -> Result<bool> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations')",
        [],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Brings a connection's schema up to date.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Schema version of the database behind `conn`, 0 if never migrated.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

/// Whether opening the database through [`crate::db::db::Db`] would apply migrations.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
