//! Configuration management for the baily application.
//!
//! Settings are stored as pretty-printed JSON in the application data
//! directory (see [`DataStorage`]). Every section is optional: a missing file
//! or a missing section falls back to defaults, so the logbook works without
//! any setup.
//!
//! ## Sections
//!
//! - **Calendar**: reference timezone used to bucket records by day and week,
//!   and how wall-clock input is turned into instants ([`DstMode`])
//! - **Logbook**: default baby, history length, default bottle quantity
//! - **Notifications**: id of the newest notification already seen
//!
//! ```rust,no_run
//! use baily::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.last_notification_id = Some(3);
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::calendar::Calendar;
use super::data_storage::DataStorage;
use super::dst::DstMode;
use super::error::ValidationError;
use crate::libs::messages::Message;
use anyhow::Result;
use chrono_tz::Tz;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// Reference timezone and wall-clock resolution.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarConfig {
    /// IANA name, e.g. `Europe/Paris`.
    pub timezone: String,

    /// How dates and times typed without an offset become instants.
    #[serde(default)]
    pub dst_mode: DstMode,
}

/// Logbook behaviour.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogbookConfig {
    /// Baby used when a command is run without `--baby`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_baby: Option<i64>,

    /// Number of most recent records shown by the list commands.
    pub history_limit: usize,

    /// Quantity in millilitres used when `bottle add` gets no `--quantity`.
    pub default_bottle_quantity: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logbook: Option<LogbookConfig>,

    /// Newest notification the user has already listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_notification_id: Option<i64>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            timezone: DEFAULT_TIMEZONE.to_string(),
            dst_mode: DstMode::default(),
        }
    }
}

impl Default for LogbookConfig {
    /// 30 records of history, 140 ml bottles, no default baby.
    fn default() -> Self {
        LogbookConfig {
            default_baby: None,
            history_limit: 30,
            default_bottle_quantity: 140,
        }
    }
}

impl CalendarConfig {
    /// Parses the timezone name.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownTimezone`] for a name missing from the IANA database.
    pub fn tz(&self) -> Result<Tz, ValidationError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ValidationError::UnknownTimezone(self.timezone.clone()))
    }
}

impl Config {
    /// Loads the configuration, or the defaults if the file does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Loads the configuration stored at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or is not valid JSON for
    /// [`Config`]. The file is left untouched.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Writes the configuration to `path`, replacing any previous content.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn calendar_settings(&self) -> CalendarConfig {
        self.calendar.clone().unwrap_or_default()
    }

    pub fn logbook_settings(&self) -> LogbookConfig {
        self.logbook.clone().unwrap_or_default()
    }

    /// Calendar on the system clock in the configured timezone.
    pub fn calendar(&self) -> Result<Calendar> {
        Ok(Calendar::new(self.calendar_settings().tz()?))
    }

    /// Interactive setup, pre-filled with the current values.
    ///
    /// Only the calendar and logbook settings are asked for; the default baby
    /// and the last seen notification are carried over as they are.
    ///
    /// # Errors
    ///
    /// Fails before prompting when the existing file cannot be parsed.
    pub fn init() -> Result<Self> {
        let mut config = Self::read()?;
        let theme = ColorfulTheme::default();

        let calendar = config.calendar_settings();
        let timezone: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTimezone.to_string())
            .default(calendar.timezone)
            .validate_with(|input: &String| -> Result<(), String> {
                input.parse::<Tz>().map(|_| ()).map_err(|_| ValidationError::UnknownTimezone(input.clone()).to_string())
            })
            .interact_text()?;

        let modes = [DstMode::Timezone, DstMode::Heuristic];
        let labels = [Message::DstModeTimezone.to_string(), Message::DstModeHeuristic.to_string()];
        let current = modes.iter().position(|mode| *mode == calendar.dst_mode).unwrap_or(0);
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptDstMode.to_string())
            .items(&labels)
            .default(current)
            .interact()?;

        config.calendar = Some(CalendarConfig {
            timezone,
            dst_mode: modes[selected],
        });

        let logbook = config.logbook_settings();
        let history_limit: usize = Input::with_theme(&theme)
            .with_prompt(Message::PromptHistoryLimit.to_string())
            .default(logbook.history_limit)
            .interact_text()?;
        let default_bottle_quantity: u32 = Input::with_theme(&theme)
            .with_prompt(Message::PromptDefaultQuantity.to_string())
            .default(logbook.default_bottle_quantity)
            .interact_text()?;

        config.logbook = Some(LogbookConfig {
            default_baby: logbook.default_baby,
            history_limit,
            default_bottle_quantity,
        });

        Ok(config)
    }
}
