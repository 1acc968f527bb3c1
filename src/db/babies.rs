//! Babies whose care is being logged.
//!
//! Every bottle, diaper and sleep belongs to exactly one baby. The schema
//! declares those references with `ON DELETE CASCADE`, so removing a baby
//! here also removes its whole history.
//!
//! ## Features
//!
//! - **Registration**: add a baby with its creation instant
//! - **Lookup**: optional and error-raising variants by id
//! - **Listing**: all babies in the order they were added
//! - **Renaming and Removal**: with a not-found error on unknown ids

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::record::Baby;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_BABY: &str = "SELECT id, name, created_at FROM babies";

/// Repository for the babies table.
///
/// Borrows the connection of an open [`Db`]; build one per command with
/// [`Babies::new`].
pub struct Babies<'a> {
    conn: &'a Connection,
}

impl<'a> Babies<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Records a new baby and returns it with its assigned id.
    ///
    /// `name` is stored as given; trimming and emptiness checks belong to
    /// [`crate::libs::form::baby_name`].
    pub fn insert(&self, name: &str, created_at: DateTime<Utc>) -> Result<Baby> {
        self.conn
            .execute("INSERT INTO babies (name, created_at) VALUES (?1, ?2)", params![name, created_at])?;

        Ok(Baby {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            created_at: Some(created_at),
        })
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Baby>> {
        let baby = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_BABY), params![id], Self::from_row)
            .optional()?;

        Ok(baby)
    }

    /// Like [`get_by_id`](Self::get_by_id), but a missing baby is an error.
    pub fn find(&self, id: i64) -> Result<Baby> {
        self.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::BabyNotFound(id)))
    }

    /// All babies, oldest first.
    pub fn fetch_all(&self) -> Result<Vec<Baby>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY created_at, id", SELECT_BABY))?;
        let babies = stmt.query_map([], Self::from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(babies)
    }

    /// # Errors
    ///
    /// Returns [`Message::BabyNotFound`] when no baby has this id.
    pub fn rename(&self, id: i64, name: &str) -> Result<()> {
        let affected_rows = self.conn.execute("UPDATE babies SET name = ?1 WHERE id = ?2", params![name, id])?;

        if affected_rows == 0 {
            return Err(msg_error_anyhow!(Message::BabyNotFound(id)));
        }

        Ok(())
    }

    /// Deletes the baby together with all of its records.
    pub fn delete(&self, id: i64) -> Result<()> {
        let affected_rows = self.conn.execute("DELETE FROM babies WHERE id = ?1", params![id])?;

        if affected_rows == 0 {
            return Err(msg_error_anyhow!(Message::BabyNotFound(id)));
        }

        Ok(())
    }

    fn from_row(row: &Row) -> rusqlite::Result<Baby> {
        Ok(Baby {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}
