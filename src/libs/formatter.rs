//! Text rendering of records and durations for the console views.
//!
//! The `Formatted*` structs hold one table row each, already turned into
//! strings through a [`Calendar`], so the view code only lays them out.

use super::calendar::Calendar;
use super::clock::Clock;
use super::locale::Locale;
use super::messages::Message;
use super::record::{Bottle, Diaper, Sleep};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// `HH:MM`, hours not wrapped at 24. Negative durations render as `00:00`.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// `HHhMM`, the style of daily sleep totals.
pub fn format_day_total(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}h{:02}", hours.max(0), mins.max(0))
}

/// Millilitres with their unit, e.g. `150ml`.
pub fn format_quantity(quantity: u32) -> String {
    format!("{}ml", quantity)
}

/// `dd/MM - dd/MM`
pub fn format_week_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format("%d/%m"), end.format("%d/%m"))
}

/// Clock time, followed by the relative phrase for records from today.
pub fn format_time<C: Clock, L: Locale>(calendar: &Calendar<C, L>, instant: DateTime<Utc>) -> String {
    let time = calendar.display_time(instant);
    match calendar.distance_from_now(instant) {
        Some(relative) => format!("{} ({})", time, relative),
        None => time,
    }
}

/// Row of the daily bottle table.
#[derive(Debug, Clone)]
pub struct FormattedBottle {
    pub id: i64,

    /// Clock time, with the relative phrase for today
    pub time: String,
    pub quantity: String,
}

/// Row of the daily diaper table.
#[derive(Debug, Clone)]
pub struct FormattedDiaper {
    pub id: i64,
    pub time: String,
    pub description: String,
}

/// Row of the daily sleep table.
#[derive(Debug, Clone)]
pub struct FormattedSleep {
    pub id: i64,
    pub start: String,

    /// Clock time, or `en cours` while the baby sleeps
    pub end: String,

    /// Spelled out, e.g. `1 heure et 5 minutes`
    pub duration: String,
    pub description: String,
}

impl FormattedBottle {
    pub fn new<C: Clock, L: Locale>(calendar: &Calendar<C, L>, bottle: &Bottle) -> Self {
        FormattedBottle {
            id: bottle.id.unwrap_or(0),
            time: format_time(calendar, bottle.time),
            quantity: format_quantity(bottle.quantity),
        }
    }
}

impl FormattedDiaper {
    pub fn new<C: Clock, L: Locale>(calendar: &Calendar<C, L>, diaper: &Diaper) -> Self {
        FormattedDiaper {
            id: diaper.id.unwrap_or(0),
            time: format_time(calendar, diaper.time),
            description: diaper.description.clone().unwrap_or_default(),
        }
    }
}

impl FormattedSleep {
    pub fn new<C: Clock, L: Locale>(calendar: &Calendar<C, L>, sleep: &Sleep) -> Self {
        let end = match sleep.end {
            Some(end) => calendar.display_time(end),
            None => Message::SleepOngoing.to_string(),
        };

        FormattedSleep {
            id: sleep.id.unwrap_or(0),
            start: format_time(calendar, sleep.start),
            end,
            duration: calendar.describe_duration(sleep.duration(calendar.now())),
            description: sleep.description.clone().unwrap_or_default(),
        }
    }
}
