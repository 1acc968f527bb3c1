//! Sleeps from the command line.
//!
//! A sleep can be recorded when the baby falls asleep and closed later with
//! `sleep end`, or entered afterwards with both ends at once.
//!
//! ## Usage
//!
//! ```bash
//! baily sleep add
//! baily sleep end 7
//! baily sleep add --start-time 13:10 --end-time 14:55 -m "Calme"
//! baily sleep stats
//! ```
//!
//! Daily totals include ongoing sleeps up to the current time.

use super::{confirm, Session};
use crate::{
    db::sleeps::Sleeps,
    libs::{
        form::{ensure_past, instant_or, optional_description, wall_clock_on, SleepForm},
        error::ValidationError,
        messages::Message,
        record::{total_sleep_minutes, Sleep},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Duration;
use clap::{Args, Subcommand};

/// Arguments of `baily sleep`.
#[derive(Debug, Args)]
pub struct SleepArgs {
    #[command(subcommand)]
    command: SleepCommand,
}

#[derive(Debug, Subcommand)]
enum SleepCommand {
    /// Record a sleep; without an end it stays ongoing
    Add {
        /// Day the sleep started, today by default
        #[arg(long)]
        start_date: Option<String>,
        /// hh:mm the sleep started, now by default
        #[arg(long)]
        start_time: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        /// hh:mm the baby woke up; leave out for an ongoing sleep
        #[arg(long)]
        end_time: Option<String>,
        /// Optional note, at most 50 characters
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Change the start, end or description of a sleep
    Edit {
        id: i64,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        start_time: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        end_time: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Close an ongoing sleep, now unless a date and time are given
    End {
        id: i64,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Delete a sleep
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Sleeps grouped by day with daily totals
    List {
        #[arg(short, long)]
        all: bool,
    },
    /// Weekly sleep totals, most recent week first
    Stats,
}

/// Runs a sleep subcommand.
///
/// Edited times without a date stay on the day they already had. An end
/// before the start is rejected with [`ValidationError::EndBeforeStart`].
pub fn cmd(args: SleepArgs, baby: Option<i64>) -> Result<()> {
    let session = Session::open()?;
    let sleeps = Sleeps::new(&session.db);
    let calendar = &session.calendar;
    let mode = session.dst_mode();

    match args.command {
        SleepCommand::Add {
            start_date,
            start_time,
            end_date,
            end_time,
            description,
        } => {
            let baby_id = session.baby_id(baby)?;
            let form = SleepForm {
                start_date,
                start_time,
                end_date,
                end_time,
                description,
            };
            let valid = form.validate(calendar, mode)?;

            sleeps.insert(&Sleep::new(baby_id, valid.start, valid.end, valid.description))?;
            msg_success!(Message::SleepCreated);
        }
        SleepCommand::Edit {
            id,
            start_date,
            start_time,
            end_date,
            end_time,
            description,
        } => {
            let mut sleep = sleeps.find(id)?;
            sleep.start = instant_or(calendar, mode, start_date.as_deref(), start_time.as_deref(), sleep.start)?;
            let anchor = calendar.day_of(sleep.end.unwrap_or(sleep.start));
            if let Some(wall) = wall_clock_on(end_date.as_deref(), end_time.as_deref(), calendar.today(), anchor)? {
                sleep.end = Some(ensure_past(calendar.resolve_wall_clock(wall, mode), calendar.now())?);
            }
            if description.is_some() {
                sleep.description = optional_description(description.as_deref())?;
            }
            if sleep.end.is_some_and(|end| end < sleep.start) {
                return Err(ValidationError::EndBeforeStart.into());
            }

            sleeps.update(&sleep)?;
            msg_success!(Message::SleepUpdated);
        }
        SleepCommand::End { id, date, time } => {
            let start = sleeps.find(id)?.start;
            let end = instant_or(calendar, mode, date.as_deref(), time.as_deref(), calendar.now())?;
            if end < start {
                return Err(ValidationError::EndBeforeStart.into());
            }

            let sleep = sleeps.end_sleep(id, end)?;
            msg_success!(Message::SleepEnded(calendar.describe_duration(sleep.duration(end))));
        }
        SleepCommand::Delete { id, yes } => {
            sleeps.find(id)?;
            if confirm(Message::ConfirmDelete, yes)? {
                sleeps.delete(id)?;
                msg_success!(Message::SleepDeleted);
            }
        }
        SleepCommand::List { all } => {
            let baby_id = session.baby_id(baby)?;
            let history = sleeps.fetch(baby_id, session.history_limit(all))?;
            if history.is_empty() {
                msg_info!(Message::NoSleeps);
                return Ok(());
            }

            let now = calendar.now();
            msg_print!(Message::SleepsHeader, true);
            View::sleeps(
                calendar,
                &calendar.group_by_day_with(history, |items| Duration::minutes(total_sleep_minutes(items, now))),
            )?;
        }
        SleepCommand::Stats => {
            let baby_id = session.baby_id(baby)?;
            let history = sleeps.fetch(baby_id, None)?;
            if history.is_empty() {
                msg_info!(Message::NoStats);
                return Ok(());
            }

            let now = calendar.now();
            msg_print!(Message::WeeklyStatsHeader, true);
            View::weekly_sleeps(&calendar.group_by_weeks(history, |items| Duration::minutes(total_sleep_minutes(items, now))))?;
        }
    }

    Ok(())
}
