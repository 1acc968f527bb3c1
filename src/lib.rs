//! # Baily - baby-care logbook
//!
//! A command-line logbook for bottle feedings, diaper changes and sleeps.
//!
//! ## Features
//!
//! - **Day grouping**: records bucketed by calendar day in a reference
//!   timezone, with daily totals
//! - **Weekly statistics**: totals per ISO week, most recent week first
//! - **Relative times**: French phrases such as `il y a 1 heure et 23 minutes`
//! - **Wall-clock input**: dates and times typed in separate fields, resolved
//!   across DST changes
//! - **Several babies**: each with its own history
//!
//! ## Usage
//!
//! ```rust,no_run
//! use baily::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
