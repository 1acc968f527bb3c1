//! Diaper changes from the command line.
//!
//! Without `-m`, `diaper add` offers the usual descriptions in a selection
//! menu, with a last entry for typing something else. Lists show the number of
//! changes per day.

use super::{confirm, Session};
use crate::{
    db::diapers::Diapers,
    libs::{
        form::{instant_or, required_description, DiaperForm, DIAPER_PRESETS},
        messages::Message,
        record::Diaper,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Arguments of `baily diaper`.
#[derive(Debug, Args)]
pub struct DiaperArgs {
    #[command(subcommand)]
    command: DiaperCommand,
}

#[derive(Debug, Subcommand)]
enum DiaperCommand {
    /// Record a diaper change; asks for a description when none is given
    Add {
        /// Free text, at most 50 characters
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// YYYY-MM-DD, `today` or `hier`
        #[arg(short, long)]
        date: Option<String>,
        /// hh:mm
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Change the description or time of a diaper change
    Edit {
        id: i64,
        #[arg(short = 'm', long)]
        description: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Delete a diaper change
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Diaper changes grouped by day
    List {
        /// Show the whole history
        #[arg(short, long)]
        all: bool,
    },
}

pub fn cmd(args: DiaperArgs, baby: Option<i64>) -> Result<()> {
    let session = Session::open()?;
    let diapers = Diapers::new(&session.db);
    let calendar = &session.calendar;

    match args.command {
        DiaperCommand::Add { description, date, time } => {
            let baby_id = session.baby_id(baby)?;
            let description = match description {
                Some(description) => description,
                None => choose_description()?,
            };
            let valid = DiaperForm {
                description: Some(description),
                date,
                time,
            }
            .validate(calendar, session.dst_mode())?;

            diapers.insert(&Diaper::new(baby_id, valid.time, Some(valid.description)))?;
            msg_success!(Message::DiaperCreated);
        }
        DiaperCommand::Edit { id, description, date, time } => {
            let mut diaper = diapers.find(id)?;
            if let Some(description) = description {
                diaper.description = Some(required_description(Some(&description))?);
            }
            diaper.time = instant_or(calendar, session.dst_mode(), date.as_deref(), time.as_deref(), diaper.time)?;

            diapers.update(&diaper)?;
            msg_success!(Message::DiaperUpdated);
        }
        DiaperCommand::Delete { id, yes } => {
            diapers.find(id)?;
            if confirm(Message::ConfirmDelete, yes)? {
                diapers.delete(id)?;
                msg_success!(Message::DiaperDeleted);
            }
        }
        DiaperCommand::List { all } => {
            let baby_id = session.baby_id(baby)?;
            let history = diapers.fetch(baby_id, session.history_limit(all))?;
            if history.is_empty() {
                msg_info!(Message::NoDiapers);
                return Ok(());
            }

            msg_print!(Message::DiapersHeader, true);
            View::diapers(calendar, &calendar.group_by_day_with(history, |items| items.len()))?;
        }
    }

    Ok(())
}

/// One of the presets, or free text.
fn choose_description() -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut items: Vec<String> = DIAPER_PRESETS.iter().map(|preset| preset.to_string()).collect();
    items.push(Message::OtherDescription.to_string());

    let selected = Select::with_theme(&theme)
        .with_prompt(Message::PromptDescription.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    if selected < DIAPER_PRESETS.len() {
        return Ok(items.swap_remove(selected));
    }

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptOtherDescription.to_string())
        .interact_text()?;
    Ok(description)
}
