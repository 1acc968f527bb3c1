#[cfg(test)]
mod tests {
    use baily::db::babies::Babies;
    use baily::db::db::Db;
    use baily::db::sleeps::Sleeps;
    use baily::libs::record::{total_sleep_minutes, Sleep};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use test_context::{test_context, TestContext};

    struct SleepTestContext {
        db: Db,
        baby_id: i64,
        start: DateTime<Utc>,
    }

    impl TestContext for SleepTestContext {
        fn setup() -> Self {
            let db = Db::open_in_memory().unwrap();
            let start = Utc.with_ymd_and_hms(2022, 2, 21, 12, 0, 0).unwrap();
            let baby_id = Babies::new(&db).insert("Léa", start).unwrap().id;
            SleepTestContext { db, baby_id, start }
        }
    }

    #[test_context(SleepTestContext)]
    #[test]
    fn test_insert_finished_and_ongoing(ctx: &mut SleepTestContext) {
        let sleeps = Sleeps::new(&ctx.db);

        let nap = sleeps
            .insert(&Sleep::new(ctx.baby_id, ctx.start, Some(ctx.start + Duration::minutes(45)), Some("Normal".to_string())))
            .unwrap();
        let night = sleeps.insert(&Sleep::new(ctx.baby_id, ctx.start + Duration::hours(8), None, None)).unwrap();

        let nap = sleeps.find(nap).unwrap();
        assert!(!nap.is_ongoing());
        assert_eq!(nap.description.as_deref(), Some("Normal"));

        let ongoing = sleeps.fetch_ongoing(ctx.baby_id).unwrap();
        assert_eq!(ongoing.len(), 1);
        assert_eq!(ongoing[0].id, Some(night));
    }

    #[test_context(SleepTestContext)]
    #[test]
    fn test_end_sleep(ctx: &mut SleepTestContext) {
        let sleeps = Sleeps::new(&ctx.db);
        let id = sleeps.insert(&Sleep::new(ctx.baby_id, ctx.start, None, None)).unwrap();
        let end = ctx.start + Duration::minutes(95);

        let ended = sleeps.end_sleep(id, end).unwrap();
        assert_eq!(ended.end, Some(end));
        assert_eq!(sleeps.find(id).unwrap().end, Some(end));
        assert!(sleeps.fetch_ongoing(ctx.baby_id).unwrap().is_empty());

        let error = sleeps.end_sleep(id, end).unwrap_err();
        assert_eq!(error.to_string(), format!("❌ La sieste {} est déjà terminée", id));
    }

    #[test_context(SleepTestContext)]
    #[test]
    fn test_fetch_orders_by_start(ctx: &mut SleepTestContext) {
        let sleeps = Sleeps::new(&ctx.db);
        for hours in [2, 9, 5] {
            let start = ctx.start + Duration::hours(hours);
            sleeps.insert(&Sleep::new(ctx.baby_id, start, Some(start + Duration::minutes(30)), None)).unwrap();
        }

        let all = sleeps.fetch(ctx.baby_id, None).unwrap();
        let starts: Vec<DateTime<Utc>> = all.iter().map(|s| s.start).collect();
        assert_eq!(
            starts,
            vec![ctx.start + Duration::hours(9), ctx.start + Duration::hours(5), ctx.start + Duration::hours(2)]
        );
        assert_eq!(total_sleep_minutes(&all, ctx.start), 90);
    }

    #[test_context(SleepTestContext)]
    #[test]
    fn test_update_and_delete(ctx: &mut SleepTestContext) {
        let sleeps = Sleeps::new(&ctx.db);
        let id = sleeps.insert(&Sleep::new(ctx.baby_id, ctx.start, None, None)).unwrap();

        let mut sleep = sleeps.find(id).unwrap();
        sleep.end = Some(ctx.start + Duration::hours(2));
        sleep.description = Some("Agité".to_string());
        sleeps.update(&sleep).unwrap();
        assert_eq!(sleeps.find(id).unwrap(), sleep);

        sleeps.delete(id).unwrap();
        assert!(sleeps.delete(id).is_err());
    }
}
