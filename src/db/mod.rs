//! Persistence of the logbook in SQLite.
//!
//! [`db::Db`] owns the connection and applies migrations when opened. Each
//! table has a small repository borrowing that connection.
//!
//! ## Features
//!
//! - **Core Infrastructure**: connection setup and versioned migrations
//! - **Babies**: the owners of every record, removal cascading to their history
//! - **Records**: bottles, diapers and sleeps, fetched newest first
//! - **Notifications**: global announcements with a seen/unseen check

pub mod babies;
pub mod bottles;
pub mod db;
pub mod diapers;
pub mod migrations;
pub mod notifications;
pub mod sleeps;
