#[cfg(test)]
mod tests {
    use baily::libs::calendar::Calendar;
    use baily::libs::clock::FixedClock;
    use baily::libs::dst::{adjusted_for_dst, DstMode};
    use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
    use chrono_tz::Europe::Paris;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry() -> NaiveDateTime {
        day(2022, 5, 10).and_hms_opt(8, 15, 0).unwrap()
    }

    #[test]
    fn test_summer_months_are_identity() {
        for month in 4..=9 {
            assert_eq!(adjusted_for_dst(entry(), day(2022, month, 15)), entry());
        }
    }

    #[test]
    fn test_winter_months_add_one_hour() {
        for today in [day(2022, 11, 2), day(2022, 12, 15), day(2023, 1, 1), day(2023, 2, 28)] {
            assert_eq!(adjusted_for_dst(entry(), today), entry() + Duration::hours(1));
        }
    }

    #[test]
    fn test_march_switches_on_last_sunday() {
        // Last Sunday of March 2022 is the 27th
        assert_eq!(adjusted_for_dst(entry(), day(2022, 3, 26)), entry() + Duration::hours(1));
        assert_eq!(adjusted_for_dst(entry(), day(2022, 3, 27)), entry());
        assert_eq!(adjusted_for_dst(entry(), day(2022, 3, 31)), entry());
    }

    #[test]
    fn test_october_switches_on_last_sunday() {
        // Last Sunday of October 2022 is the 30th
        assert_eq!(adjusted_for_dst(entry(), day(2022, 10, 29)), entry());
        assert_eq!(adjusted_for_dst(entry(), day(2022, 10, 30)), entry() + Duration::hours(1));
        assert_eq!(adjusted_for_dst(entry(), day(2022, 10, 31)), entry() + Duration::hours(1));
    }

    #[test]
    fn test_heuristic_mode_reads_against_utc_plus_two() {
        let summer = Calendar::with_clock(Paris, FixedClock(Utc.with_ymd_and_hms(2022, 7, 1, 10, 0, 0).unwrap()));
        let wall = day(2022, 7, 1).and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(summer.resolve_wall_clock(wall, DstMode::Heuristic), Utc.with_ymd_and_hms(2022, 7, 1, 7, 0, 0).unwrap());
        assert_eq!(summer.resolve_wall_clock(wall, DstMode::Timezone), Utc.with_ymd_and_hms(2022, 7, 1, 7, 0, 0).unwrap());
    }

    #[test]
    fn test_modes_disagree_on_backfill_across_transition() {
        // Today is in winter, the entry is from the summer before
        let winter = Calendar::with_clock(Paris, FixedClock(Utc.with_ymd_and_hms(2022, 11, 15, 10, 0, 0).unwrap()));
        let wall = day(2022, 10, 20).and_hms_opt(9, 0, 0).unwrap();

        assert_eq!(winter.resolve_wall_clock(wall, DstMode::Timezone), Utc.with_ymd_and_hms(2022, 10, 20, 7, 0, 0).unwrap());
        assert_eq!(winter.resolve_wall_clock(wall, DstMode::Heuristic), Utc.with_ymd_and_hms(2022, 10, 20, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_autumn_ambiguous_hour_takes_earliest() {
        let calendar = Calendar::with_clock(Paris, FixedClock(Utc.with_ymd_and_hms(2022, 11, 1, 10, 0, 0).unwrap()));
        // 02:30 happens twice on 2022-10-30
        let wall = day(2022, 10, 30).and_hms_opt(2, 30, 0).unwrap();
        assert_eq!(calendar.resolve_wall_clock(wall, DstMode::Timezone), Utc.with_ymd_and_hms(2022, 10, 30, 0, 30, 0).unwrap());
    }
}
