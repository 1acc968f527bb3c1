//! Terminal rendering of the logbook.
//!
//! Day-grouped views print a header line per day, for example
//! `Aujourd’hui · Total : 450ml`, followed by a table of that day's records.
//! Weekly views print one table with a row per ISO week, most recent first.
//!
//! ## Features
//!
//! - **Daily Lists**: bottles, diapers and sleeps grouped by calendar day
//! - **Weekly Statistics**: bottle quantities and sleep time per week
//! - **Babies and Notifications**: flat tables with markers for the default
//!   baby and for unseen notifications

use super::calendar::{parse_day_key, Calendar};
use super::clock::Clock;
use super::formatter::{format_day_total, format_duration, format_quantity, format_week_range, FormattedBottle, FormattedDiaper, FormattedSleep};
use super::grouping::{Groups, WeeklyGroups};
use super::locale::Locale;
use super::messages::Message;
use super::record::{Baby, Bottle, Diaper, Notification, Sleep};
use crate::msg_print;
use anyhow::Result;
use chrono::Duration;
use prettytable::{row, Table};

/// Namespace for the table renderers.
pub struct View {}

impl View {
    /// Lists babies; the default one is flagged with `*`.
    pub fn babies(babies: &[Baby], default_baby: Option<i64>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![Message::ColumnId, Message::ColumnName, Message::ColumnCreated]);
        for baby in babies {
            let marker = if Some(baby.id) == default_baby { " *" } else { "" };
            table.add_row(row![
                baby.id,
                format!("{}{}", baby.name, marker),
                baby.created_at.map(|at| at.format("%d/%m/%Y").to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// One table per day, each headed by its label and quantity total.
    pub fn bottles<C: Clock, L: Locale>(calendar: &Calendar<C, L>, days: &Groups<String, Bottle, u32>) -> Result<()> {
        for (key, bucket) in days {
            Self::day_header(calendar, key, Message::BottleDayTotal(bucket.aggregate));

            let mut table = Table::new();
            table.add_row(row![Message::ColumnId, Message::ColumnTime, Message::ColumnQuantity]);
            for bottle in &bucket.items {
                let formatted = FormattedBottle::new(calendar, bottle);
                table.add_row(row![formatted.id, formatted.time, formatted.quantity]);
            }
            table.printstd();
        }

        Ok(())
    }

    /// Like [`View::bottles`], headed by the number of changes.
    pub fn diapers<C: Clock, L: Locale>(calendar: &Calendar<C, L>, days: &Groups<String, Diaper, usize>) -> Result<()> {
        for (key, bucket) in days {
            Self::day_header(calendar, key, Message::DiaperDayCount(bucket.aggregate));

            let mut table = Table::new();
            table.add_row(row![Message::ColumnId, Message::ColumnTime, Message::ColumnDescription]);
            for diaper in &bucket.items {
                let formatted = FormattedDiaper::new(calendar, diaper);
                table.add_row(row![formatted.id, formatted.time, formatted.description]);
            }
            table.printstd();
        }

        Ok(())
    }

    /// Like [`View::bottles`], headed by the total time asleep. Ongoing sleeps
    /// count up to now.
    pub fn sleeps<C: Clock, L: Locale>(calendar: &Calendar<C, L>, days: &Groups<String, Sleep, Duration>) -> Result<()> {
        for (key, bucket) in days {
            Self::day_header(calendar, key, Message::SleepDayTotal(format_day_total(&bucket.aggregate)));

            let mut table = Table::new();
            table.add_row(row![
                Message::ColumnId,
                Message::ColumnStart,
                Message::ColumnEnd,
                Message::ColumnDuration,
                Message::ColumnDescription
            ]);
            for sleep in &bucket.items {
                let formatted = FormattedSleep::new(calendar, sleep);
                table.add_row(row![formatted.id, formatted.start, formatted.end, formatted.duration, formatted.description]);
            }
            table.printstd();
        }

        Ok(())
    }

    /// Weekly table with the millilitres drunk per week.
    pub fn weekly_bottles(weeks: &WeeklyGroups<Bottle, u32>) -> Result<()> {
        Self::weekly(weeks, |total| format_quantity(*total))
    }

    pub fn weekly_sleeps(weeks: &WeeklyGroups<Sleep, Duration>) -> Result<()> {
        Self::weekly(weeks, format_duration)
    }

    /// `fresh` leading entries are marked with a bullet.
    pub fn notifications<C: Clock, L: Locale>(calendar: &Calendar<C, L>, notifications: &[Notification], fresh: usize) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![Message::ColumnId, Message::ColumnCreated, Message::ColumnTitle, Message::ColumnDescription]);
        for (position, notification) in notifications.iter().enumerate() {
            let id = notification.id.unwrap_or(0);
            let marker = if position < fresh { " •" } else { "" };
            table.add_row(row![
                format!("{}{}", id, marker),
                calendar.relative_date(calendar.day_of(notification.date)),
                notification.title,
                notification.description
            ]);
        }
        table.printstd();

        Ok(())
    }

    fn weekly<T, V>(weeks: &WeeklyGroups<T, V>, total: impl Fn(&V) -> String) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![Message::ColumnWeek, Message::ColumnDates, Message::ColumnTotal, Message::ColumnCount]);
        for bucket in weeks.values() {
            table.add_row(row![
                bucket.week,
                format_week_range(bucket.start, bucket.end),
                total(&bucket.total),
                bucket.items.len()
            ]);
        }
        table.printstd();

        Ok(())
    }

    fn day_header<C: Clock, L: Locale>(calendar: &Calendar<C, L>, key: &str, total: Message) {
        let label = parse_day_key(key).map_or_else(|| key.to_string(), |date| calendar.relative_date(date));
        msg_print!(format!("{} · {}", label, total), true);
    }
}
