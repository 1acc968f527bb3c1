#[cfg(test)]
mod tests {
    use baily::libs::config::{CalendarConfig, Config, LogbookConfig, CONFIG_FILE_NAME};
    use baily::libs::dst::DstMode;
    use baily::libs::error::ValidationError;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join(CONFIG_FILE_NAME);
            ConfigTestContext { _temp_dir: temp_dir, path }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.calendar.is_none());
        assert!(config.logbook.is_none());
        assert!(config.last_notification_id.is_none());

        let calendar = config.calendar_settings();
        assert_eq!(calendar.timezone, "Europe/Paris");
        assert_eq!(calendar.dst_mode, DstMode::Timezone);

        let logbook = config.logbook_settings();
        assert_eq!(logbook.history_limit, 30);
        assert_eq!(logbook.default_bottle_quantity, 140);
        assert_eq!(logbook.default_baby, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            calendar: Some(CalendarConfig {
                timezone: "America/Montreal".to_string(),
                dst_mode: DstMode::Heuristic,
            }),
            logbook: Some(LogbookConfig {
                default_baby: Some(2),
                history_limit: 10,
                default_bottle_quantity: 180,
            }),
            last_notification_id: Some(7),
        };

        config.save_to(&ctx.path).unwrap();
        assert_eq!(Config::read_from(&ctx.path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.path, r#"{ "calendar": { "timezone": "Europe/Brussels" } }"#).unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        let calendar = config.calendar_settings();
        assert_eq!(calendar.timezone, "Europe/Brussels");
        assert_eq!(calendar.dst_mode, DstMode::Timezone);
        assert_eq!(config.logbook_settings(), LogbookConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_dst_mode_serialized_lowercase(ctx: &mut ConfigTestContext) {
        let config = Config {
            calendar: Some(CalendarConfig {
                dst_mode: DstMode::Heuristic,
                ..Default::default()
            }),
            ..Default::default()
        };
        config.save_to(&ctx.path).unwrap();

        let raw = std::fs::read_to_string(&ctx.path).unwrap();
        assert!(raw.contains(r#""dst_mode": "heuristic""#));
        assert!(!raw.contains("logbook"));
    }

    #[test]
    fn test_unknown_timezone() {
        let calendar = CalendarConfig {
            timezone: "Mars/Olympus".to_string(),
            ..Default::default()
        };
        assert_eq!(calendar.tz(), Err(ValidationError::UnknownTimezone("Mars/Olympus".to_string())));

        let config = Config {
            calendar: Some(calendar),
            ..Default::default()
        };
        assert!(config.calendar().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        let raw = r#"{ "logbook": { "default_baby": 3, "#;
        std::fs::write(&ctx.path, raw).unwrap();

        assert!(Config::read_from(&ctx.path).is_err());
        assert_eq!(std::fs::read_to_string(&ctx.path).unwrap(), raw);
    }
}
