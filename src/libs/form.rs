//! Validation of user input for the record commands.
//!
//! Dates and times arrive as separate text fields, the way a date picker and a
//! time picker would submit them. Each form checks its fields and turns the
//! wall-clock values into instants through the [`Calendar`].

use super::calendar::{Calendar, KEY_FORMAT};
use super::clock::Clock;
use super::dst::DstMode;
use super::error::ValidationError;
use super::locale::Locale;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

pub const MAX_DESCRIPTION_LEN: usize = 50;

/// Preset descriptions offered for diapers.
pub const DIAPER_PRESETS: [&str; 3] = ["Pipi 💦", "Popo 💩", "Mixte"];

/// Accepts `YYYY-MM-DD` and the keywords `today`/`aujourd'hui` and
/// `yesterday`/`hier`.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::MissingDate);
    }

    match input.to_lowercase().as_str() {
        "today" | "aujourd'hui" | "aujourd’hui" => Ok(today),
        "yesterday" | "hier" => Ok(today - Duration::days(1)),
        _ => NaiveDate::parse_from_str(input, KEY_FORMAT).map_err(|_| ValidationError::InvalidDate),
    }
}

/// Accepts `hh:mm`, ignoring anything after the minutes (e.g. seconds).
pub fn parse_time(input: &str) -> Result<NaiveTime, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::MissingTime);
    }

    let head = input.get(..5).ok_or(ValidationError::InvalidTimeFormat)?;
    let well_formed = head.char_indices().all(|(i, c)| if i == 2 { c == ':' } else { c.is_ascii_digit() });
    if !well_formed {
        return Err(ValidationError::InvalidTimeFormat);
    }

    NaiveTime::parse_from_str(head, "%H:%M").map_err(|_| ValidationError::InvalidTimeFormat)
}

/// Combines optional date and time fields.
///
/// Both missing means "not given". A time without a date is taken as today,
/// a date without a time is an error.
pub fn wall_clock(date: Option<&str>, time: Option<&str>, today: NaiveDate) -> Result<Option<NaiveDateTime>, ValidationError> {
    wall_clock_on(date, time, today, today)
}

/// Same as [`wall_clock`], but a time without a date lands on `anchor`.
///
/// Edits pass the record's own day as the anchor.
pub fn wall_clock_on(
    date: Option<&str>,
    time: Option<&str>,
    today: NaiveDate,
    anchor: NaiveDate,
) -> Result<Option<NaiveDateTime>, ValidationError> {
    let blank = |field: Option<&str>| field.map_or(true, |value| value.trim().is_empty());

    match (blank(date), blank(time)) {
        (true, true) => Ok(None),
        (false, true) => Err(ValidationError::MissingTime),
        (true, false) => Ok(Some(anchor.and_time(parse_time(time.unwrap_or_default())?))),
        (false, false) => {
            let date = parse_date(date.unwrap_or_default(), today)?;
            let time = parse_time(time.unwrap_or_default())?;
            Ok(Some(date.and_time(time)))
        }
    }
}

pub fn parse_quantity(input: &str) -> Result<u32, ValidationError> {
    match input.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(ValidationError::InvalidQuantity),
    }
}

pub fn ensure_past(instant: DateTime<Utc>, now: DateTime<Utc>) -> Result<DateTime<Utc>, ValidationError> {
    if instant <= now {
        Ok(instant)
    } else {
        Err(ValidationError::NotInPast)
    }
}

fn check_length(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        Err(ValidationError::DescriptionTooLong { max: MAX_DESCRIPTION_LEN })
    } else {
        Ok(())
    }
}

/// Required, at most [`MAX_DESCRIPTION_LEN`] characters.
pub fn required_description(input: Option<&str>) -> Result<String, ValidationError> {
    let description = input.map(str::trim).unwrap_or_default();
    if description.is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    check_length(description)?;
    Ok(description.to_string())
}

/// Optional, at most [`MAX_DESCRIPTION_LEN`] characters. Blank is `None`.
pub fn optional_description(input: Option<&str>) -> Result<Option<String>, ValidationError> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(description) => {
            check_length(description)?;
            Ok(Some(description.to_string()))
        }
    }
}

pub fn baby_name(input: &str) -> Result<String, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        Err(ValidationError::MissingName)
    } else {
        Ok(name.to_string())
    }
}

/// Instant typed in the date/time fields, or `current` when both are blank.
/// A bare time stays on the day of `current`. A typed instant must not be in
/// the future.
pub fn instant_or<C: Clock, L: Locale>(
    calendar: &Calendar<C, L>,
    mode: DstMode,
    date: Option<&str>,
    time: Option<&str>,
    current: DateTime<Utc>,
) -> Result<DateTime<Utc>, ValidationError> {
    match wall_clock_on(date, time, calendar.today(), calendar.day_of(current))? {
        Some(wall) => ensure_past(calendar.resolve_wall_clock(wall, mode), calendar.now()),
        None => Ok(current),
    }
}

fn past_instant<C: Clock, L: Locale>(
    calendar: &Calendar<C, L>,
    mode: DstMode,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<DateTime<Utc>, ValidationError> {
    instant_or(calendar, mode, date, time, calendar.now())
}

#[derive(Debug, Clone, Default)]
pub struct BottleForm {
    pub quantity: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidBottle {
    pub time: DateTime<Utc>,
    pub quantity: u32,
}

impl BottleForm {
    /// `default_quantity` applies when no quantity was typed.
    pub fn validate<C: Clock, L: Locale>(&self, calendar: &Calendar<C, L>, mode: DstMode, default_quantity: u32) -> Result<ValidBottle, ValidationError> {
        let quantity = match self.quantity.as_deref() {
            Some(quantity) => parse_quantity(quantity)?,
            None if default_quantity > 0 => default_quantity,
            None => return Err(ValidationError::InvalidQuantity),
        };
        let time = past_instant(calendar, mode, self.date.as_deref(), self.time.as_deref())?;
        Ok(ValidBottle { time, quantity })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiaperForm {
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidDiaper {
    pub time: DateTime<Utc>,
    pub description: String,
}

impl DiaperForm {
    pub fn validate<C: Clock, L: Locale>(&self, calendar: &Calendar<C, L>, mode: DstMode) -> Result<ValidDiaper, ValidationError> {
        let description = required_description(self.description.as_deref())?;
        let time = past_instant(calendar, mode, self.date.as_deref(), self.time.as_deref())?;
        Ok(ValidDiaper { time, description })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SleepForm {
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidSleep {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl SleepForm {
    pub fn validate<C: Clock, L: Locale>(&self, calendar: &Calendar<C, L>, mode: DstMode) -> Result<ValidSleep, ValidationError> {
        let description = optional_description(self.description.as_deref())?;
        let start = past_instant(calendar, mode, self.start_date.as_deref(), self.start_time.as_deref())?;

        let end = match wall_clock(self.end_date.as_deref(), self.end_time.as_deref(), calendar.today())? {
            Some(wall) => Some(ensure_past(calendar.resolve_wall_clock(wall, mode), calendar.now())?),
            None => None,
        };

        if let Some(end) = end {
            if end < start {
                return Err(ValidationError::EndBeforeStart);
            }
        }

        Ok(ValidSleep { start, end, description })
    }
}
