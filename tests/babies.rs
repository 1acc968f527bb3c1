#[cfg(test)]
mod tests {
    use baily::db::babies::Babies;
    use baily::db::bottles::Bottles;
    use baily::db::db::Db;
    use baily::db::diapers::Diapers;
    use baily::db::sleeps::Sleeps;
    use baily::libs::record::{Bottle, Diaper, Sleep};
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct BabyTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for BabyTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("baily.db")).unwrap();
            BabyTestContext { _temp_dir: temp_dir, db }
        }
    }

    #[test_context(BabyTestContext)]
    #[test]
    fn test_insert_and_fetch(ctx: &mut BabyTestContext) {
        let babies = Babies::new(&ctx.db);
        let created_at = Utc.with_ymd_and_hms(2022, 1, 5, 10, 0, 0).unwrap();

        let lea = babies.insert("Léa", created_at).unwrap();
        let tom = babies.insert("Tom", created_at + Duration::days(1)).unwrap();

        let fetched = babies.get_by_id(lea.id).unwrap().unwrap();
        assert_eq!(fetched, lea);
        assert_eq!(fetched.created_at, Some(created_at));

        let all = babies.fetch_all().unwrap();
        assert_eq!(all, vec![lea, tom]);
    }

    #[test_context(BabyTestContext)]
    #[test]
    fn test_rename(ctx: &mut BabyTestContext) {
        let babies = Babies::new(&ctx.db);
        let baby = babies.insert("Lea", Utc::now()).unwrap();

        babies.rename(baby.id, "Léa").unwrap();
        assert_eq!(babies.find(baby.id).unwrap().name, "Léa");
    }

    #[test_context(BabyTestContext)]
    #[test]
    fn test_missing_baby(ctx: &mut BabyTestContext) {
        let babies = Babies::new(&ctx.db);

        assert!(babies.get_by_id(42).unwrap().is_none());
        let error = babies.find(42).unwrap_err();
        assert_eq!(error.to_string(), "❌ Aucun bébé avec l'identifiant 42");
        assert!(babies.rename(42, "X").is_err());
        assert!(babies.delete(42).is_err());
    }

    #[test_context(BabyTestContext)]
    #[test]
    fn test_delete_cascades_to_records(ctx: &mut BabyTestContext) {
        let babies = Babies::new(&ctx.db);
        let bottles = Bottles::new(&ctx.db);
        let diapers = Diapers::new(&ctx.db);
        let sleeps = Sleeps::new(&ctx.db);
        let now = Utc::now();

        let removed = babies.insert("Léa", now).unwrap();
        let kept = babies.insert("Tom", now).unwrap();

        for baby_id in [removed.id, kept.id] {
            bottles.insert(&Bottle::new(baby_id, now, 120)).unwrap();
            diapers.insert(&Diaper::new(baby_id, now, Some("Mixte".to_string()))).unwrap();
            sleeps.insert(&Sleep::new(baby_id, now, None, None)).unwrap();
        }

        babies.delete(removed.id).unwrap();

        assert!(babies.get_by_id(removed.id).unwrap().is_none());
        assert!(bottles.fetch(removed.id, None).unwrap().is_empty());
        assert!(diapers.fetch(removed.id, None).unwrap().is_empty());
        assert!(sleeps.fetch(removed.id, None).unwrap().is_empty());

        assert_eq!(bottles.fetch(kept.id, None).unwrap().len(), 1);
        assert_eq!(diapers.fetch(kept.id, None).unwrap().len(), 1);
        assert_eq!(sleeps.fetch(kept.id, None).unwrap().len(), 1);
    }

    #[test_context(BabyTestContext)]
    #[test]
    fn test_records_require_existing_baby(ctx: &mut BabyTestContext) {
        let bottles = Bottles::new(&ctx.db);
        assert!(bottles.insert(&Bottle::new(999, Utc::now(), 120)).is_err());
    }
}
