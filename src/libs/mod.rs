//! Core library modules for the baily application.
//!
//! ## Features
//!
//! - **Calendar**: day and week keys in a reference timezone, relative time
//!   phrases, wall-clock resolution across DST changes
//! - **Grouping**: ordered day buckets and most-recent-first week buckets
//! - **Records**: bottles, diapers, sleeps and their validation forms
//! - **Infrastructure**: configuration, data storage, logging, messaging
//! - **User Interface**: console tables and formatting
//!
//! ## Usage
//!
//! ```rust
//! use baily::libs::calendar::Calendar;
//! use baily::libs::clock::FixedClock;
//! use baily::libs::record::{total_quantity, Bottle};
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2022, 2, 23, 18, 0, 0).unwrap();
//! let calendar = Calendar::with_clock(chrono_tz::Europe::Paris, FixedClock(now));
//! let bottles = vec![Bottle::new(1, now, 120), Bottle::new(1, now, 90)];
//!
//! let days = calendar.group_by_day_with(bottles, total_quantity);
//! assert_eq!(days["2022-02-23"].aggregate, 210);
//! ```

pub mod calendar;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod dst;
pub mod error;
pub mod form;
pub mod formatter;
pub mod grouping;
pub mod locale;
pub mod logging;
pub mod messages;
pub mod record;
pub mod view;
