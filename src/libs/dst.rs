//! France-only daylight-saving correction for wall-clock input.
//!
//! Summer time starts on the last Sunday of March and ends on the last Sunday
//! of October. The heuristic looks at *today's* position relative to those
//! dates, not at the date being adjusted, so backfilled entries that cross a
//! transition are shifted by the wrong amount. [`DstMode::Timezone`] avoids
//! that by resolving wall-clock input through the IANA database instead.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// How a wall-clock date and time without offset becomes an instant.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DstMode {
    /// Look the local time up in the configured IANA timezone.
    #[default]
    Timezone,
    /// Read it against UTC+02:00 and apply [`adjusted_for_dst`].
    Heuristic,
}

/// Returns `date` unchanged or one hour later, depending on where `today`
/// sits relative to the French DST transitions.
pub fn adjusted_for_dst(date: NaiveDateTime, today: NaiveDate) -> NaiveDateTime {
    let plus_one_hour = date + Duration::hours(1);

    match today.month() {
        4..=9 => date,
        11 | 12 | 1 | 2 => plus_one_hour,
        month => {
            let before_last_sunday = today < last_sunday_of(today.year(), month);
            match (month, before_last_sunday) {
                (10, true) | (3, false) => date,
                _ => plus_one_hour,
            }
        }
    }
}

/// Last Sunday of the given month.
pub fn last_sunday_of(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(NaiveDate::MAX);

    let back = (last_day.weekday().num_days_from_sunday()) as i64;
    debug_assert_eq!((last_day - Duration::days(back)).weekday(), Weekday::Sun);
    last_day - Duration::days(back)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_sundays() {
        assert_eq!(last_sunday_of(2022, 3), NaiveDate::from_ymd_opt(2022, 3, 27).unwrap());
        assert_eq!(last_sunday_of(2022, 10), NaiveDate::from_ymd_opt(2022, 10, 30).unwrap());
        // Month ending on a Sunday
        assert_eq!(last_sunday_of(2024, 3), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(last_sunday_of(2022, 12), NaiveDate::from_ymd_opt(2022, 12, 25).unwrap());
    }
}
