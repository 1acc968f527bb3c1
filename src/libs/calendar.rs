//! Calendar keys and human-readable time strings in a reference timezone.
//!
//! A [`Calendar`] bundles the three things every time-relative computation
//! needs: the reference timezone records are bucketed in, the [`Clock`] giving
//! "now", and the [`Locale`] providing the words. Everything here is pure given
//! those three values.
//!
//! ```rust
//! use baily::libs::calendar::Calendar;
//! use baily::libs::clock::FixedClock;
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2022, 2, 23, 11, 30, 0).unwrap();
//! let calendar = Calendar::with_clock(chrono_tz::Europe::Paris, FixedClock(now));
//!
//! assert_eq!(calendar.day_key(now), "2022-02-23");
//! assert_eq!(calendar.week_key(now), "2022-02-21");
//! assert_eq!(calendar.display_time(now), "12:30");
//! ```

use super::clock::{Clock, SystemClock};
use super::dst::{self, DstMode};
use super::grouping::{self, Bucket, Groups, WeeklyGroups};
use super::locale::{French, Locale};
use super::record::TimedRecord;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Canonical form of a day key.
pub const KEY_FORMAT: &str = "%Y-%m-%d";

/// Offset the heuristic DST mode reads wall-clock input against (UTC+02:00).
const FIXED_SUMMER_OFFSET_HOURS: i64 = 2;

/// Timezone, clock and locale used by every time-relative computation.
///
/// Production code uses [`Calendar::new`], which reads the system clock and
/// speaks French. Tests freeze time with [`Calendar::with_clock`].
pub struct Calendar<C = SystemClock, L = French> {
    /// Reference timezone for day and week boundaries
    tz: Tz,

    /// Source of "now"
    clock: C,

    /// Words and date patterns
    locale: L,
}

impl Calendar {
    pub fn new(tz: Tz) -> Self {
        Self::with_clock(tz, SystemClock)
    }
}

impl<C: Clock> Calendar<C, French> {
    pub fn with_clock(tz: Tz, clock: C) -> Self {
        Calendar { tz, clock, locale: French }
    }
}

impl<C: Clock, L: Locale> Calendar<C, L> {
    pub fn with_locale<M: Locale>(self, locale: M) -> Calendar<C, M> {
        Calendar {
            tz: self.tz,
            clock: self.clock,
            locale,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn locale(&self) -> &L {
        &self.locale
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Local calendar date of an instant.
    pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    pub fn today(&self) -> NaiveDate {
        self.day_of(self.now())
    }

    pub fn is_today(&self, instant: DateTime<Utc>) -> bool {
        self.day_of(instant) == self.today()
    }

    /// `YYYY-MM-DD` of the local date, the key of daily buckets.
    ///
    /// Two instants share a key exactly when they fall on the same calendar day
    /// in the reference timezone, whatever their UTC dates.
    pub fn day_key(&self, instant: DateTime<Utc>) -> String {
        day_key_of(self.day_of(instant))
    }

    pub fn week_start_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        week_start(self.day_of(instant))
    }

    /// Day key of the Monday starting the instant's week.
    pub fn week_key(&self, instant: DateTime<Utc>) -> String {
        day_key_of(self.week_start_of(instant))
    }

    /// `HH:mm` on a 24-hour clock.
    pub fn display_time(&self, instant: DateTime<Utc>) -> String {
        instant.with_timezone(&self.tz).format("%H:%M").to_string()
    }

    /// Section label for a day bucket.
    ///
    /// # Examples
    ///
    /// With today being 2022-02-23:
    ///
    /// | date       | label        |
    /// |------------|--------------|
    /// | 2022-02-23 | `Aujourd’hui` |
    /// | 2022-02-22 | `Hier`       |
    /// | 2022-02-24 | `Demain`     |
    /// | 2022-02-01 | `01/02/2022` |
    pub fn relative_date(&self, date: NaiveDate) -> String {
        match (date - self.today()).num_days() {
            0 => self.locale.today().to_string(),
            -1 => self.locale.yesterday().to_string(),
            1 => self.locale.tomorrow().to_string(),
            _ => date.format(self.locale.date_format()).to_string(),
        }
    }

    /// Relative label for a single record, or `None` when the record is not
    /// from today and an absolute time should be shown instead.
    ///
    /// Within a minute either side of now (up to 119 seconds) the seconds
    /// ladder is used, always in the past tense and regardless of the day.
    /// Beyond that, only instants on today's date get a phrase such as
    /// `il y a 1 heure et 23 minutes` or `dans 25 minutes`.
    pub fn distance_from_now(&self, instant: DateTime<Utc>) -> Option<String> {
        let now = self.now();
        let elapsed = now.signed_duration_since(instant);

        if elapsed.num_minutes().abs() <= 1 {
            return Some(self.locale.past(&self.locale.seconds(elapsed.num_seconds())));
        }

        if self.day_of(instant) != self.day_of(now) {
            return None;
        }

        let phrase = self.hours_and_minutes(elapsed.abs());
        if instant < now {
            Some(self.locale.past(&phrase))
        } else {
            Some(self.locale.future(&phrase))
        }
    }

    /// Hours and minutes joined by the locale joiner, zero parts omitted.
    pub fn hours_and_minutes(&self, duration: Duration) -> String {
        let total = duration.num_minutes().max(0);
        let (hours, minutes) = (total / 60, total % 60);

        let mut parts = Vec::with_capacity(2);
        if hours > 0 {
            parts.push(self.locale.hours(hours));
        }
        if minutes > 0 || parts.is_empty() {
            parts.push(self.locale.minutes(minutes));
        }
        parts.join(self.locale.joiner())
    }

    /// Label for a sleep length.
    pub fn describe_duration(&self, duration: Duration) -> String {
        if duration.num_minutes() <= 0 {
            self.locale.under_a_minute().to_string()
        } else {
            self.hours_and_minutes(duration)
        }
    }

    /// Turns a wall-clock date and time typed by the user into an instant.
    ///
    /// # Arguments
    ///
    /// * `wall_clock` - date and time as read on a clock in the reference timezone
    /// * `mode` - [`DstMode::Timezone`] asks the timezone database for the
    ///   offset; [`DstMode::Heuristic`] assumes UTC+02:00 and corrects by one
    ///   hour based on today's date
    ///
    /// # Returns
    ///
    /// The matching UTC instant. A time skipped by the spring change is moved
    /// one hour forward, a time repeated by the autumn change resolves to its
    /// first occurrence.
    pub fn resolve_wall_clock(&self, wall_clock: NaiveDateTime, mode: DstMode) -> DateTime<Utc> {
        match mode {
            DstMode::Timezone => self
                .tz
                .from_local_datetime(&wall_clock)
                .earliest()
                // Inside the spring-forward gap the hour does not exist locally
                .or_else(|| self.tz.from_local_datetime(&(wall_clock + Duration::hours(1))).earliest())
                .map(|local| local.with_timezone(&Utc))
                .unwrap_or_else(|| Utc.from_utc_datetime(&wall_clock)),
            DstMode::Heuristic => {
                let fixed = wall_clock - Duration::hours(FIXED_SUMMER_OFFSET_HOURS);
                Utc.from_utc_datetime(&dst::adjusted_for_dst(fixed, self.today()))
            }
        }
    }

    /// [`dst::adjusted_for_dst`] relative to today.
    pub fn adjusted_for_dst(&self, date: NaiveDateTime) -> NaiveDateTime {
        dst::adjusted_for_dst(date, self.today())
    }

    /// Buckets records by [`Calendar::day_key`] of their instant.
    pub fn group_by_day<T: TimedRecord>(&self, records: impl IntoIterator<Item = T>) -> Groups<String, T> {
        grouping::group(records, |record| self.day_key(record.instant()))
    }

    /// Same as [`Calendar::group_by_day`], with a per-day aggregate such as a
    /// quantity total or a count.
    pub fn group_by_day_with<T, A>(&self, records: impl IntoIterator<Item = T>, aggregate: impl Fn(&[T]) -> A) -> Groups<String, T, A>
    where
        T: TimedRecord,
    {
        grouping::group_with(records, |record| self.day_key(record.instant()), aggregate)
    }

    /// Buckets records by ISO week, most recent week first.
    pub fn group_by_weeks<T, V>(&self, records: impl IntoIterator<Item = T>, total: impl Fn(&[T]) -> V) -> WeeklyGroups<T, V>
    where
        T: TimedRecord,
    {
        grouping::group_by_weeks(records, |record| self.week_start_of(record.instant()), total)
    }

    /// Flattens day buckets back into records, in key order.
    pub fn flatten<T, A>(&self, groups: Groups<String, T, A>) -> Vec<T> {
        groups.into_values().flat_map(|Bucket { items, .. }| items).collect()
    }
}

pub fn day_key_of(date: NaiveDate) -> String {
    date.format(KEY_FORMAT).to_string()
}

/// Inverse of [`day_key_of`]; `None` for anything else.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, KEY_FORMAT).ok()
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Sunday closing the week that starts on `start`.
pub fn week_end(start: NaiveDate) -> NaiveDate {
    start + Duration::days(6)
}
