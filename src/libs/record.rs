//! Logbook entities.
//!
//! Instants are always UTC. Turning them into days, weeks and display times
//! in the reference timezone is the job of [`crate::libs::calendar::Calendar`].

use chrono::{DateTime, Duration, Utc};

/// Anything placed on the timeline by a single instant.
///
/// Interval records (sleeps) are placed by their start.
pub trait TimedRecord {
    fn instant(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Baby {
    pub id: i64,

    /// Trimmed, never empty
    pub name: String,

    /// When the baby was added to the logbook
    pub created_at: Option<DateTime<Utc>>,
}

/// A bottle feeding; `quantity` is in millilitres.
#[derive(Debug, Clone, PartialEq)]
pub struct Bottle {
    /// `None` until stored
    pub id: Option<i64>,

    /// Owning baby
    pub baby_id: i64,

    /// When the bottle was given
    pub time: DateTime<Utc>,

    /// Strictly positive
    pub quantity: u32,
}

impl Bottle {
    pub fn new(baby_id: i64, time: DateTime<Utc>, quantity: u32) -> Self {
        Bottle {
            id: None,
            baby_id,
            time,
            quantity,
        }
    }
}

impl TimedRecord for Bottle {
    fn instant(&self) -> DateTime<Utc> {
        self.time
    }
}

/// A diaper change.
#[derive(Debug, Clone, PartialEq)]
pub struct Diaper {
    /// `None` until stored
    pub id: Option<i64>,
    pub baby_id: i64,
    pub time: DateTime<Utc>,

    /// Preset or free text, at most 50 characters
    pub description: Option<String>,
}

impl Diaper {
    pub fn new(baby_id: i64, time: DateTime<Utc>, description: Option<String>) -> Self {
        Diaper {
            id: None,
            baby_id,
            time,
            description,
        }
    }
}

impl TimedRecord for Diaper {
    fn instant(&self) -> DateTime<Utc> {
        self.time
    }
}

/// A sleep session. No `end` means the baby is still asleep.
#[derive(Debug, Clone, PartialEq)]
pub struct Sleep {
    /// `None` until stored
    pub id: Option<i64>,
    pub baby_id: i64,

    /// Falling asleep; decides the day the sleep is grouped under
    pub start: DateTime<Utc>,

    /// Waking up, never before `start`
    pub end: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl Sleep {
    pub fn new(baby_id: i64, start: DateTime<Utc>, end: Option<DateTime<Utc>>, description: Option<String>) -> Self {
        Sleep {
            id: None,
            baby_id,
            start,
            end,
            description,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// Length of the sleep, up to `now` while it is ongoing.
    ///
    /// # Panics
    ///
    /// Panics if a recorded end precedes the start.
    pub fn duration(&self, now: DateTime<Utc>) -> Duration {
        match self.end {
            Some(end) => {
                assert!(end >= self.start, "sleep {:?} ends before it starts", self.id);
                end - self.start
            }
            None => (now - self.start).max(Duration::zero()),
        }
    }
}

impl TimedRecord for Sleep {
    fn instant(&self) -> DateTime<Utc> {
        self.start
    }
}

/// An announcement shared by every baby of the logbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Option<i64>,

    /// Publication instant, the primary ordering key
    pub date: DateTime<Utc>,
    pub title: String,
    pub description: String,
}

/// Sum of bottle quantities, in millilitres.
pub fn total_quantity(bottles: &[Bottle]) -> u32 {
    bottles.iter().map(|bottle| bottle.quantity).sum()
}

/// Sum of sleep lengths in whole minutes, each sleep truncated on its own.
pub fn total_sleep_minutes(sleeps: &[Sleep], now: DateTime<Utc>) -> i64 {
    sleeps.iter().map(|sleep| sleep.duration(now).num_minutes()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ongoing_sleep_runs_until_now() {
        let start = Utc.with_ymd_and_hms(2022, 2, 23, 13, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2022, 2, 23, 14, 30, 59).unwrap();
        let sleep = Sleep::new(1, start, None, None);
        assert!(sleep.is_ongoing());
        assert_eq!(total_sleep_minutes(&[sleep], now), 90);
    }

    #[test]
    #[should_panic(expected = "ends before it starts")]
    fn reversed_interval_panics() {
        let start = Utc.with_ymd_and_hms(2022, 2, 23, 13, 0, 0).unwrap();
        let sleep = Sleep::new(1, start, Some(start - Duration::minutes(5)), None);
        sleep.duration(start);
    }
}
