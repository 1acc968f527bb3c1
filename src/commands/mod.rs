//! Command-line interface.
//!
//! Every subcommand lives in its own module exposing an `Args` struct and a
//! `cmd` function. Record commands share a [`Session`]: the configuration, the
//! open database and the calendar built from the configured timezone.

pub mod baby;
pub mod bottle;
pub mod diaper;
pub mod init;
pub mod migrations;
pub mod notifications;
pub mod sleep;

use crate::db::babies::Babies;
use crate::db::db::Db;
use crate::libs::calendar::Calendar;
use crate::libs::config::Config;
use crate::libs::dst::DstMode;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage babies")]
    Baby(baby::BabyArgs),
    #[command(about = "Record and review bottle feedings")]
    Bottle(bottle::BottleArgs),
    #[command(about = "Record and review diaper changes")]
    Diaper(diaper::DiaperArgs),
    #[command(about = "Record and review sleeps")]
    Sleep(sleep::SleepArgs),
    #[command(about = "Show notifications")]
    Notifications(notifications::NotificationsArgs),
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Baby to work on, instead of the configured default
    #[arg(long, global = true)]
    baby: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Baby(args) => baby::cmd(args),
            Commands::Bottle(args) => bottle::cmd(args, cli.baby),
            Commands::Diaper(args) => diaper::cmd(args, cli.baby),
            Commands::Sleep(args) => sleep::cmd(args, cli.baby),
            Commands::Notifications(args) => notifications::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// State shared by the record commands for one invocation.
pub struct Session {
    pub config: Config,
    pub db: Db,
    pub calendar: Calendar,
}

impl Session {
    pub fn open() -> Result<Self> {
        let config = Config::read()?;
        let calendar = config.calendar()?;
        let db = Db::new()?;

        Ok(Session { config, db, calendar })
    }

    pub fn dst_mode(&self) -> DstMode {
        self.config.calendar_settings().dst_mode
    }

    /// Row limit for list commands: the configured history, or everything.
    pub fn history_limit(&self, all: bool) -> Option<usize> {
        (!all).then(|| self.config.logbook_settings().history_limit)
    }

    /// Baby named on the command line, else the configured default, else the
    /// only baby recorded.
    pub fn baby_id(&self, requested: Option<i64>) -> Result<i64> {
        let babies = Babies::new(&self.db);

        if let Some(id) = requested.or(self.config.logbook_settings().default_baby) {
            return Ok(babies.find(id)?.id);
        }

        match babies.fetch_all()?.as_slice() {
            [only] => Ok(only.id),
            _ => Err(msg_error_anyhow!(Message::NoBabySelected)),
        }
    }
}

/// Asks before a destructive action; `yes` answers in advance.
pub(crate) fn confirm(prompt: Message, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
    }
    Ok(confirmed)
}
