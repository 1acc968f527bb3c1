//! Interactive configuration setup.
//!
//! The wizard starts from the current `config.json`. A file that cannot be
//! parsed aborts the wizard; `--defaults` replaces it.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Arguments of `baily init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Reset every setting to its default without prompting
    #[arg(short, long)]
    defaults: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.defaults { Config::default() } else { Config::init()? };
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
