#[cfg(test)]
mod tests {
    use baily::libs::calendar::Calendar;
    use baily::libs::clock::FixedClock;
    use baily::libs::dst::DstMode;
    use baily::libs::error::ValidationError;
    use baily::libs::form::{
        baby_name, instant_or, parse_date, parse_time, wall_clock, wall_clock_on, BottleForm, DiaperForm, SleepForm, MAX_DESCRIPTION_LEN,
    };
    use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
    use chrono_tz::Europe::Paris;
    use test_context::{test_context, TestContext};

    /// Frozen at 2022-02-23 13:00 in Paris.
    struct FormTestContext {
        now: DateTime<Utc>,
        calendar: Calendar<FixedClock>,
    }

    impl TestContext for FormTestContext {
        fn setup() -> Self {
            let now = Utc.with_ymd_and_hms(2022, 2, 23, 12, 0, 0).unwrap();
            FormTestContext {
                now,
                calendar: Calendar::with_clock(Paris, FixedClock(now)),
            }
        }
    }

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 2, 23).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2022-02-01", today()), Ok(NaiveDate::from_ymd_opt(2022, 2, 1).unwrap()));
        assert_eq!(parse_date("hier", today()), Ok(NaiveDate::from_ymd_opt(2022, 2, 22).unwrap()));
        assert_eq!(parse_date("Today", today()), Ok(today()));
        assert_eq!(parse_date("", today()), Err(ValidationError::MissingDate));
        assert_eq!(parse_date("2022-02-30", today()), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("08:05"), Ok(NaiveTime::from_hms_opt(8, 5, 0).unwrap()));
        assert_eq!(parse_time("08:05:59"), Ok(NaiveTime::from_hms_opt(8, 5, 0).unwrap()));
        assert_eq!(parse_time("8:05"), Err(ValidationError::InvalidTimeFormat));
        assert_eq!(parse_time("25:00"), Err(ValidationError::InvalidTimeFormat));
        assert_eq!(parse_time(" "), Err(ValidationError::MissingTime));
    }

    #[test]
    fn test_wall_clock_combinations() {
        assert_eq!(wall_clock(None, None, today()), Ok(None));
        assert_eq!(wall_clock(Some("2022-02-20"), None, today()), Err(ValidationError::MissingTime));
        assert_eq!(wall_clock(None, Some("07:30"), today()), Ok(Some(today().and_hms_opt(7, 30, 0).unwrap())));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::InvalidQuantity.to_string(), "La quantité est invalide");
        assert_eq!(ValidationError::NotInPast.to_string(), "La date doit être dans le passé");
        assert_eq!(
            ValidationError::DescriptionTooLong { max: MAX_DESCRIPTION_LEN }.to_string(),
            "La description doit faire moins de 50 caractères"
        );
        assert_eq!(ValidationError::EndBeforeStart.to_string(), "La date de fin doit être après la date de début");
        assert_eq!(baby_name("  "), Err(ValidationError::MissingName));
        assert_eq!(baby_name(" Léa "), Ok("Léa".to_string()));
    }

    #[test_context(FormTestContext)]
    #[test]
    fn test_bottle_form_defaults_to_now(ctx: &mut FormTestContext) {
        let valid = BottleForm::default().validate(&ctx.calendar, DstMode::Timezone, 140).unwrap();
        assert_eq!(valid.time, ctx.now);
        assert_eq!(valid.quantity, 140);
    }

    #[test_context(FormTestContext)]
    #[test]
    fn test_bottle_form_rules(ctx: &mut FormTestContext) {
        let form = BottleForm {
            quantity: some("0"),
            ..Default::default()
        };
        assert_eq!(form.validate(&ctx.calendar, DstMode::Timezone, 140), Err(ValidationError::InvalidQuantity));

        let form = BottleForm {
            quantity: some("abc"),
            ..Default::default()
        };
        assert_eq!(form.validate(&ctx.calendar, DstMode::Timezone, 140), Err(ValidationError::InvalidQuantity));

        let form = BottleForm {
            quantity: some("120"),
            date: some("2022-02-23"),
            time: some("14:00"),
        };
        assert_eq!(form.validate(&ctx.calendar, DstMode::Timezone, 140), Err(ValidationError::NotInPast));

        let form = BottleForm {
            quantity: some("120"),
            date: some("2022-02-23"),
            time: some("09:30"),
        };
        let valid = form.validate(&ctx.calendar, DstMode::Timezone, 140).unwrap();
        assert_eq!(valid.time, Utc.with_ymd_and_hms(2022, 2, 23, 8, 30, 0).unwrap());
        assert_eq!(valid.quantity, 120);
    }

    #[test_context(FormTestContext)]
    #[test]
    fn test_diaper_form_requires_description(ctx: &mut FormTestContext) {
        let form = DiaperForm::default();
        assert_eq!(form.validate(&ctx.calendar, DstMode::Timezone), Err(ValidationError::MissingDescription));

        let form = DiaperForm {
            description: Some("x".repeat(MAX_DESCRIPTION_LEN + 1)),
            ..Default::default()
        };
        assert_eq!(
            form.validate(&ctx.calendar, DstMode::Timezone),
            Err(ValidationError::DescriptionTooLong { max: MAX_DESCRIPTION_LEN })
        );

        let form = DiaperForm {
            description: some("Pipi 💦"),
            ..Default::default()
        };
        assert_eq!(form.validate(&ctx.calendar, DstMode::Timezone).unwrap().description, "Pipi 💦");
    }

    #[test_context(FormTestContext)]
    #[test]
    fn test_sleep_form(ctx: &mut FormTestContext) {
        let reversed = SleepForm {
            start_date: some("2022-02-23"),
            start_time: some("10:00"),
            end_date: some("2022-02-23"),
            end_time: some("09:00"),
            description: None,
        };
        assert_eq!(reversed.validate(&ctx.calendar, DstMode::Timezone), Err(ValidationError::EndBeforeStart));

        let ongoing = SleepForm {
            start_date: some("2022-02-23"),
            start_time: some("10:00"),
            description: some("  "),
            ..Default::default()
        };
        let valid = ongoing.validate(&ctx.calendar, DstMode::Timezone).unwrap();
        assert_eq!(valid.start, Utc.with_ymd_and_hms(2022, 2, 23, 9, 0, 0).unwrap());
        assert_eq!(valid.end, None);
        assert_eq!(valid.description, None);
    }

    #[test_context(FormTestContext)]
    #[test]
    fn test_instant_or_keeps_current(ctx: &mut FormTestContext) {
        let current = Utc.with_ymd_and_hms(2022, 2, 1, 6, 0, 0).unwrap();
        assert_eq!(instant_or(&ctx.calendar, DstMode::Timezone, None, None, current), Ok(current));
        assert_eq!(
            instant_or(&ctx.calendar, DstMode::Timezone, Some("hier"), Some("21:00"), current),
            Ok(Utc.with_ymd_and_hms(2022, 2, 22, 20, 0, 0).unwrap())
        );
    }

    #[test_context(FormTestContext)]
    #[test]
    fn test_instant_or_bare_time_stays_on_record_day(ctx: &mut FormTestContext) {
        let recorded = Utc.with_ymd_and_hms(2022, 2, 18, 7, 0, 0).unwrap();
        let edited = instant_or(&ctx.calendar, DstMode::Timezone, None, Some("09:00"), recorded).unwrap();

        assert_eq!(edited, Utc.with_ymd_and_hms(2022, 2, 18, 8, 0, 0).unwrap());
        assert_eq!(ctx.calendar.day_of(edited), ctx.calendar.day_of(recorded));
        assert_eq!(ctx.calendar.day_key(edited), "2022-02-18");
    }

    #[test_context(FormTestContext)]
    #[test]
    fn test_instant_or_bare_time_on_new_record_is_today(ctx: &mut FormTestContext) {
        assert_eq!(
            instant_or(&ctx.calendar, DstMode::Timezone, None, Some("09:00"), ctx.now),
            Ok(Utc.with_ymd_and_hms(2022, 2, 23, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_wall_clock_on_anchor() {
        let anchor = NaiveDate::from_ymd_opt(2022, 2, 10).unwrap();
        assert_eq!(wall_clock_on(None, Some("22:15"), today(), anchor), Ok(Some(anchor.and_hms_opt(22, 15, 0).unwrap())));
        assert_eq!(
            wall_clock_on(Some("hier"), Some("22:15"), today(), anchor),
            Ok(Some(NaiveDate::from_ymd_opt(2022, 2, 22).unwrap().and_hms_opt(22, 15, 0).unwrap()))
        );
    }
}
