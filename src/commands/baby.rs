//! Managing the babies of the logbook.
//!
//! The default baby is the one record commands act on when `--baby` is not
//! given. The first baby added becomes the default; removing the default baby
//! clears it.
//!
//! ## Usage
//!
//! ```bash
//! baily baby add "Léa"
//! baily baby use 2
//! baily baby remove 1 --yes
//! ```

use super::confirm;
use crate::{
    db::{babies::Babies, db::Db},
    libs::{config::Config, form::baby_name, messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::{Args, Subcommand};

/// Arguments of `baily baby`.
#[derive(Debug, Args)]
pub struct BabyArgs {
    #[command(subcommand)]
    command: BabyCommand,
}

#[derive(Debug, Subcommand)]
enum BabyCommand {
    /// Add a baby
    Add { name: String },
    /// List babies, the default one marked with *
    List,
    /// Rename a baby
    Rename { id: i64, name: String },
    /// Remove a baby and all of its records
    Remove {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Make a baby the default for record commands
    Use { id: i64 },
}

/// Runs a baby subcommand, keeping `default_baby` in `config.json` in step
/// with the babies table.
pub fn cmd(args: BabyArgs) -> Result<()> {
    let db = Db::new()?;
    let babies = Babies::new(&db);
    let mut config = Config::read()?;

    match args.command {
        BabyCommand::Add { name } => {
            let baby = babies.insert(&baby_name(&name)?, Utc::now())?;

            // The first baby becomes the default
            let mut logbook = config.logbook_settings();
            if logbook.default_baby.is_none() {
                logbook.default_baby = Some(baby.id);
                config.logbook = Some(logbook);
                config.save()?;
            }

            msg_success!(Message::BabyCreated(baby.name));
        }
        BabyCommand::List => {
            let all = babies.fetch_all()?;
            if all.is_empty() {
                msg_info!(Message::NoBabies);
                return Ok(());
            }

            msg_print!(Message::BabiesHeader, true);
            View::babies(&all, config.logbook_settings().default_baby)?;
        }
        BabyCommand::Rename { id, name } => {
            let name = baby_name(&name)?;
            babies.rename(id, &name)?;
            msg_success!(Message::BabyRenamed(name));
        }
        BabyCommand::Remove { id, yes } => {
            let baby = babies.find(id)?;
            if !confirm(Message::ConfirmRemoveBaby(baby.name.clone()), yes)? {
                return Ok(());
            }

            babies.delete(id)?;

            let mut logbook = config.logbook_settings();
            if logbook.default_baby == Some(id) {
                logbook.default_baby = None;
                config.logbook = Some(logbook);
                config.save()?;
            }

            msg_success!(Message::BabyRemoved(baby.name));
        }
        BabyCommand::Use { id } => {
            let baby = babies.find(id)?;

            let mut logbook = config.logbook_settings();
            logbook.default_baby = Some(baby.id);
            config.logbook = Some(logbook);
            config.save()?;

            msg_success!(Message::DefaultBabySaved(baby.name));
        }
    }

    Ok(())
}
