#[cfg(test)]
mod tests {
    use baily::libs::calendar::Calendar;
    use baily::libs::clock::FixedClock;
    use baily::libs::formatter::{
        format_day_total, format_duration, format_quantity, format_time, format_week_range, FormattedBottle, FormattedSleep,
    };
    use baily::libs::record::{Bottle, Sleep};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use chrono_tz::Europe::Paris;

    fn calendar() -> Calendar<FixedClock> {
        Calendar::with_clock(Paris, FixedClock(Utc.with_ymd_and_hms(2022, 2, 23, 12, 0, 0).unwrap()))
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::minutes(0)), "00:00");
        assert_eq!(format_duration(&Duration::minutes(83)), "01:23");
        // Weekly totals go past 24 hours
        assert_eq!(format_duration(&Duration::minutes(31 * 60 + 5)), "31:05");
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
    }

    #[test]
    fn test_format_day_total() {
        assert_eq!(format_day_total(&Duration::minutes(95)), "01h35");
        assert_eq!(format_day_total(&Duration::minutes(14 * 60)), "14h00");
    }

    #[test]
    fn test_format_quantity_and_week_range() {
        assert_eq!(format_quantity(140), "140ml");
        let start = NaiveDate::from_ymd_opt(2022, 2, 28).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 3, 6).unwrap();
        assert_eq!(format_week_range(start, end), "28/02 - 06/03");
    }

    #[test]
    fn test_format_time_today_and_before() {
        let calendar = calendar();
        let earlier = Utc.with_ymd_and_hms(2022, 2, 23, 10, 37, 0).unwrap();
        assert_eq!(format_time(&calendar, earlier), "11:37 (il y a 1 heure et 23 minutes)");

        let yesterday = Utc.with_ymd_and_hms(2022, 2, 22, 10, 37, 0).unwrap();
        assert_eq!(format_time(&calendar, yesterday), "11:37");
    }

    #[test]
    fn test_formatted_rows() {
        let calendar = calendar();

        let mut bottle = Bottle::new(1, Utc.with_ymd_and_hms(2022, 2, 22, 6, 0, 0).unwrap(), 150);
        bottle.id = Some(4);
        let row = FormattedBottle::new(&calendar, &bottle);
        assert_eq!(row.id, 4);
        assert_eq!(row.time, "07:00");
        assert_eq!(row.quantity, "150ml");

        let start = Utc.with_ymd_and_hms(2022, 2, 22, 13, 0, 0).unwrap();
        let finished = Sleep::new(1, start, Some(start + Duration::minutes(90)), Some("Agité".to_string()));
        let row = FormattedSleep::new(&calendar, &finished);
        assert_eq!(row.end, "15:30");
        assert_eq!(row.duration, "1 heure et 30 minutes");
        assert_eq!(row.description, "Agité");

        let ongoing = Sleep::new(1, Utc.with_ymd_and_hms(2022, 2, 23, 11, 0, 0).unwrap(), None, None);
        let row = FormattedSleep::new(&calendar, &ongoing);
        assert_eq!(row.end, "en cours");
        assert_eq!(row.duration, "1 heure");
    }
}
