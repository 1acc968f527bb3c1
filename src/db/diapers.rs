//! Diaper changes.
//!
//! A change is a single instant plus a free-text description, usually one of
//! the presets offered by the `diaper add` prompt.

use crate::db::bottles::sql_limit;
use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::record::Diaper;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_DIAPER: &str = "SELECT id, baby_id, time, description FROM diapers";

/// Repository for diaper changes.
pub struct Diapers<'a> {
    conn: &'a Connection,
}

impl<'a> Diapers<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    pub fn insert(&self, diaper: &Diaper) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO diapers (baby_id, time, description) VALUES (?1, ?2, ?3)",
            params![diaper.baby_id, diaper.time, diaper.description],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Diaper>> {
        let diaper = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_DIAPER), params![id], Self::from_row)
            .optional()?;

        Ok(diaper)
    }

    pub fn find(&self, id: i64) -> Result<Diaper> {
        self.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::DiaperNotFound(id)))
    }

    /// Newest first.
    pub fn fetch(&self, baby_id: i64, limit: Option<usize>) -> Result<Vec<Diaper>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE baby_id = ?1 ORDER BY time DESC, id DESC LIMIT ?2", SELECT_DIAPER))?;
        let diapers = stmt
            .query_map(params![baby_id, sql_limit(limit)], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(diapers)
    }

    /// Overwrites the time and description of an existing change.
    pub fn update(&self, diaper: &Diaper) -> Result<()> {
        let id = diaper.id.unwrap_or_default();
        let affected_rows = self.conn.execute(
            "UPDATE diapers SET time = ?1, description = ?2 WHERE id = ?3",
            params![diaper.time, diaper.description, id],
        )?;

        if affected_rows == 0 {
            return Err(msg_error_anyhow!(Message::DiaperNotFound(id)));
        }

        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let affected_rows = self.conn.execute("DELETE FROM diapers WHERE id = ?1", params![id])?;

        if affected_rows == 0 {
            return Err(msg_error_anyhow!(Message::DiaperNotFound(id)));
        }

        Ok(())
    }

    fn from_row(row: &Row) -> rusqlite::Result<Diaper> {
        Ok(Diaper {
            id: Some(row.get(0)?),
            baby_id: row.get(1)?,
            time: row.get(2)?,
            description: row.get(3)?,
        })
    }
}
