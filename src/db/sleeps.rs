//! Sleep intervals.
//!
//! Sleeps are placed on the timeline by their start: a night that begins at
//! 21:00 and ends the next morning belongs to the evening's day.
//!
//! ## Features
//!
//! - **Ongoing Sleeps**: a sleep may be recorded before it ends
//! - **Ending**: close an ongoing sleep once the baby wakes up
//! - **CRUD and History**: same shape as the other record repositories

use crate::db::bottles::sql_limit;
use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::record::Sleep;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_SLEEP: &str = "SELECT id, baby_id, start, end, description FROM sleeps";

/// Repository for sleeps.
///
/// A sleep is an interval. Its `end` column stays `NULL` while the baby is
/// still asleep; [`Sleeps::end_sleep`] fills it in.
pub struct Sleeps<'a> {
    conn: &'a Connection,
}

impl<'a> Sleeps<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    pub fn insert(&self, sleep: &Sleep) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO sleeps (baby_id, start, end, description) VALUES (?1, ?2, ?3, ?4)",
            params![sleep.baby_id, sleep.start, sleep.end, sleep.description],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Sleep>> {
        let sleep = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_SLEEP), params![id], Self::from_row)
            .optional()?;

        Ok(sleep)
    }

    pub fn find(&self, id: i64) -> Result<Sleep> {
        self.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::SleepNotFound(id)))
    }

    /// Newest start first.
    pub fn fetch(&self, baby_id: i64, limit: Option<usize>) -> Result<Vec<Sleep>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE baby_id = ?1 ORDER BY start DESC, id DESC LIMIT ?2", SELECT_SLEEP))?;
        let sleeps = stmt
            .query_map(params![baby_id, sql_limit(limit)], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(sleeps)
    }

    /// Sleeps without an end, newest first.
    pub fn fetch_ongoing(&self, baby_id: i64) -> Result<Vec<Sleep>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE baby_id = ?1 AND end IS NULL ORDER BY start DESC", SELECT_SLEEP))?;
        let sleeps = stmt.query_map(params![baby_id], Self::from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(sleeps)
    }

    /// Overwrites start, end and description of an existing sleep.
    pub fn update(&self, sleep: &Sleep) -> Result<()> {
        let id = sleep.id.unwrap_or_default();
        let affected_rows = self.conn.execute(
            "UPDATE sleeps SET start = ?1, end = ?2, description = ?3 WHERE id = ?4",
            params![sleep.start, sleep.end, sleep.description, id],
        )?;

        if affected_rows == 0 {
            return Err(msg_error_anyhow!(Message::SleepNotFound(id)));
        }

        Ok(())
    }

    /// Closes an ongoing sleep and returns it with its new end.
    ///
    /// # Errors
    ///
    /// - [`Message::SleepNotFound`] for an unknown id
    /// - [`Message::SleepAlreadyEnded`] when the sleep already has an end
    ///
    /// Checking that `end` is not before the start is left to the caller.
    pub fn end_sleep(&self, id: i64, end: DateTime<Utc>) -> Result<Sleep> {
        let mut sleep = self.find(id)?;
        if !sleep.is_ongoing() {
            msg_bail_anyhow!(Message::SleepAlreadyEnded(id));
        }

        self.conn.execute("UPDATE sleeps SET end = ?1 WHERE id = ?2", params![end, id])?;
        sleep.end = Some(end);

        Ok(sleep)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let affected_rows = self.conn.execute("DELETE FROM sleeps WHERE id = ?1", params![id])?;

        if affected_rows == 0 {
            return Err(msg_error_anyhow!(Message::SleepNotFound(id)));
        }

        Ok(())
    }

    fn from_row(row: &Row) -> rusqlite::Result<Sleep> {
        Ok(Sleep {
            id: Some(row.get(0)?),
            baby_id: row.get(1)?,
            start: row.get(2)?,
            end: row.get(3)?,
            description: row.get(4)?,
        })
    }
}
