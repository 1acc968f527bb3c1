//! Bottle feedings from the command line.
//!
//! Lists are grouped by calendar day in the configured timezone with the
//! millilitres drunk that day; `stats` sums them per ISO week.
//!
//! ## Usage
//!
//! ```bash
//! baily bottle add -q 150
//! baily bottle add -q 120 -d hier -t 22:30
//! baily bottle edit 12 -t 06:45
//! baily bottle list --all
//! baily bottle stats
//! ```

use super::{confirm, Session};
use crate::{
    db::bottles::Bottles,
    libs::{
        form::{instant_or, parse_quantity, BottleForm},
        messages::Message,
        record::{total_quantity, Bottle},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

/// Arguments of `baily bottle`.
#[derive(Debug, Args)]
pub struct BottleArgs {
    #[command(subcommand)]
    command: BottleCommand,
}

#[derive(Debug, Subcommand)]
enum BottleCommand {
    /// Record a bottle, now unless a date and time are given
    Add {
        /// Quantity in ml, the configured default otherwise
        #[arg(short, long)]
        quantity: Option<String>,
        /// YYYY-MM-DD, `today` or `hier`
        #[arg(short, long)]
        date: Option<String>,
        /// hh:mm
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Change the quantity or time of a bottle
    Edit {
        id: i64,
        /// New quantity in ml
        #[arg(short, long)]
        quantity: Option<String>,
        /// New day; requires --time
        #[arg(short, long)]
        date: Option<String>,
        /// New hh:mm, on the bottle's own day unless --date is given
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Delete a bottle
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Bottles grouped by day with daily totals
    List {
        /// Show the whole history
        #[arg(short, long)]
        all: bool,
    },
    /// Weekly totals, most recent week first
    Stats,
}

/// Runs a bottle subcommand for `baby`, or the selected baby when `None`.
///
/// `edit` and `delete` work on a record id and do not need a baby.
pub fn cmd(args: BottleArgs, baby: Option<i64>) -> Result<()> {
    let session = Session::open()?;
    let bottles = Bottles::new(&session.db);
    let calendar = &session.calendar;

    match args.command {
        BottleCommand::Add { quantity, date, time } => {
            let baby_id = session.baby_id(baby)?;
            let form = BottleForm { quantity, date, time };
            let valid = form.validate(calendar, session.dst_mode(), session.config.logbook_settings().default_bottle_quantity)?;

            bottles.insert(&Bottle::new(baby_id, valid.time, valid.quantity))?;
            msg_success!(Message::BottleCreated(valid.quantity));
        }
        BottleCommand::Edit { id, quantity, date, time } => {
            let mut bottle = bottles.find(id)?;
            if let Some(quantity) = quantity {
                bottle.quantity = parse_quantity(&quantity)?;
            }
            bottle.time = instant_or(calendar, session.dst_mode(), date.as_deref(), time.as_deref(), bottle.time)?;

            bottles.update(&bottle)?;
            msg_success!(Message::BottleUpdated);
        }
        BottleCommand::Delete { id, yes } => {
            bottles.find(id)?;
            if confirm(Message::ConfirmDelete, yes)? {
                bottles.delete(id)?;
                msg_success!(Message::BottleDeleted);
            }
        }
        BottleCommand::List { all } => {
            let baby_id = session.baby_id(baby)?;
            let history = bottles.fetch(baby_id, session.history_limit(all))?;
            if history.is_empty() {
                msg_info!(Message::NoBottles);
                return Ok(());
            }

            msg_print!(Message::BottlesHeader, true);
            View::bottles(calendar, &calendar.group_by_day_with(history, total_quantity))?;
        }
        BottleCommand::Stats => {
            let baby_id = session.baby_id(baby)?;
            let history = bottles.fetch(baby_id, None)?;
            if history.is_empty() {
                msg_info!(Message::NoStats);
                return Ok(());
            }

            msg_print!(Message::WeeklyStatsHeader, true);
            View::weekly_bottles(&calendar.group_by_weeks(history, total_quantity))?;
        }
    }

    Ok(())
}
