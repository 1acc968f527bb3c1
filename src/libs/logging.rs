//! Tracing subscriber setup.
//!
//! Nothing is installed in normal mode: the message macros print directly and
//! no log record reaches the terminal. In debug mode the filter comes from
//! `RUST_LOG`, falling back to `baily=debug`.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "baily=debug";

pub fn init() -> anyhow::Result<()> {
    if !is_debug_mode() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;

    tracing::debug!("Logging initialized");
    Ok(())
}
