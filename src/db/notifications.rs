//! Announcements shown by the `notifications` command.
//!
//! Notifications are global, not tied to a baby. The id of the most recent one
//! the user has seen is kept in `config.json` as `last_notification_id`; "most
//! recent" always means the order of [`Notifications::fetch_all`], by date then
//! id. The new-notification check and the per-row markers both follow it.

use crate::db::db::Db;
use crate::libs::record::Notification;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// Repository for notifications.
pub struct Notifications<'a> {
    conn: &'a Connection,
}

impl<'a> Notifications<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    pub fn insert(&self, notification: &Notification) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO notifications (date, title, description) VALUES (?1, ?2, ?3)",
            params![notification.date, notification.title, notification.description],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Most recent first.
    pub fn fetch_all(&self) -> Result<Vec<Notification>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, date, title, description FROM notifications ORDER BY date DESC, id DESC")?;
        let notifications = stmt
            .query_map([], |row| {
                Ok(Notification {
                    id: Some(row.get(0)?),
                    date: row.get(1)?,
                    title: row.get(2)?,
                    description: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(notifications)
    }

    /// Id of the most recent notification.
    pub fn latest_id(&self) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row("SELECT id FROM notifications ORDER BY date DESC, id DESC LIMIT 1", [], |row| row.get(0))
            .optional()?;

        Ok(id)
    }

    /// Whether something newer than `known` exists. Knowing nothing counts as
    /// having something new.
    pub fn has_new(&self, known: Option<i64>) -> Result<bool> {
        let Some(known) = known else {
            return Ok(true);
        };

        Ok(self.latest_id()?.is_some_and(|latest| latest != known))
    }
}

/// Leading entries of a [`Notifications::fetch_all`] list that come before `known`.
///
/// An unknown or missing id makes the whole list new.
pub fn unseen(notifications: &[Notification], known: Option<i64>) -> usize {
    match known {
        Some(known) => notifications.iter().take_while(|n| n.id != Some(known)).count(),
        None => notifications.len(),
    }
}
