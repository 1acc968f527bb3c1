//! Bottle feedings.
//!
//! Quantities are stored in millilitres and the schema rejects anything not
//! strictly positive. Instants are stored in UTC; bucketing into days happens
//! later, in the reference timezone.
//!
//! ## Features
//!
//! - **CRUD**: insert, lookup, update and delete by id
//! - **History**: most recent bottles of a baby with an optional limit

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::record::Bottle;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_BOTTLE: &str = "SELECT id, baby_id, time, quantity FROM bottles";

/// Repository for bottle feedings.
pub struct Bottles<'a> {
    conn: &'a Connection,
}

impl<'a> Bottles<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Stores a bottle and returns its new id. The `id` field of `bottle` is ignored.
    pub fn insert(&self, bottle: &Bottle) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO bottles (baby_id, time, quantity) VALUES (?1, ?2, ?3)",
            params![bottle.baby_id, bottle.time, bottle.quantity],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Bottle>> {
        let bottle = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_BOTTLE), params![id], Self::from_row)
            .optional()?;

        Ok(bottle)
    }

    pub fn find(&self, id: i64) -> Result<Bottle> {
        self.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::BottleNotFound(id)))
    }

    /// The `limit` most recent bottles of a baby, newest first. `None` fetches all.
    pub fn fetch(&self, baby_id: i64, limit: Option<usize>) -> Result<Vec<Bottle>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE baby_id = ?1 ORDER BY time DESC, id DESC LIMIT ?2", SELECT_BOTTLE))?;
        let bottles = stmt
            .query_map(params![baby_id, sql_limit(limit)], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(bottles)
    }

    /// Overwrites the time and quantity of an existing bottle.
    ///
    /// The owning baby never changes.
    pub fn update(&self, bottle: &Bottle) -> Result<()> {
        let id = bottle.id.unwrap_or_default();
        let affected_rows = self.conn.execute(
            "UPDATE bottles SET time = ?1, quantity = ?2 WHERE id = ?3",
            params![bottle.time, bottle.quantity, id],
        )?;

        if affected_rows == 0 {
            return Err(msg_error_anyhow!(Message::BottleNotFound(id)));
        }

        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let affected_rows = self.conn.execute("DELETE FROM bottles WHERE id = ?1", params![id])?;

        if affected_rows == 0 {
            return Err(msg_error_anyhow!(Message::BottleNotFound(id)));
        }

        Ok(())
    }

    fn from_row(row: &Row) -> rusqlite::Result<Bottle> {
        Ok(Bottle {
            id: Some(row.get(0)?),
            baby_id: row.get(1)?,
            time: row.get(2)?,
            quantity: row.get(3)?,
        })
    }
}

/// SQLite reads a negative `LIMIT` as "no limit".
pub(crate) fn sql_limit(limit: Option<usize>) -> i64 {
    limit.map_or(-1, |limit| limit as i64)
}
