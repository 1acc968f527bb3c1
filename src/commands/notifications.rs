//! Listing and publishing notifications.
//!
//! Listing marks every notification the user has not seen yet and then stores
//! the most recent id in the configuration.

use crate::{
    db::{
        db::Db,
        notifications::{unseen, Notifications},
    },
    libs::{config::Config, messages::Message, record::Notification, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

/// Arguments of `baily notifications`.
#[derive(Debug, Args)]
pub struct NotificationsArgs {
    /// Publish a notification instead of listing them
    #[arg(short, long, requires = "title")]
    add: bool,
    /// Title of the new notification
    #[arg(short, long)]
    title: Option<String>,
    /// Body of the new notification
    #[arg(short = 'm', long, default_value = "")]
    description: String,
}

/// Publishes a notification, or lists them all and records the newest as seen.
pub fn cmd(args: NotificationsArgs) -> Result<()> {
    let db = Db::new()?;
    let notifications = Notifications::new(&db);
    let mut config = Config::read()?;

    if args.add {
        let title = args.title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            msg_bail_anyhow!(Message::NotificationTitleRequired);
        }

        notifications.insert(&Notification {
            id: None,
            date: Utc::now(),
            title: title.to_string(),
            description: args.description.trim().to_string(),
        })?;
        msg_success!(Message::NotificationCreated);
        return Ok(());
    }

    let all = notifications.fetch_all()?;
    if all.is_empty() {
        msg_info!(Message::NoNotifications);
        return Ok(());
    }

    let fresh = unseen(&all, config.last_notification_id);
    if notifications.has_new(config.last_notification_id)? {
        msg_info!(Message::NewNotifications(fresh));
    }

    msg_print!(Message::NotificationsHeader, true);
    View::notifications(&config.calendar()?, &all, fresh)?;

    config.last_notification_id = notifications.latest_id()?;
    config.save()?;

    Ok(())
}
