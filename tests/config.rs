#[cfg(test)]
mod tests {
    use takt::libs::config::{ActiveHoursConfig, BreakConfig, BreakKind, Config, HookConfig, NotificationPlacement};
    use takt::libs::error::ConfigError;
    use takt::libs::wall_clock::WallClock;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert_eq!(config.breaks.len(), 3);
        assert_eq!(config.breaks[0].kind, BreakKind::Short);
        assert_eq!(config.breaks[1].kind, BreakKind::Stretch);
        assert_eq!(config.breaks[2].kind, BreakKind::Day);
        // The end-of-day break has no countdown and starts disabled.
        assert!(config.breaks[2].break_duration.is_none());
        assert!(!config.breaks[2].enabled);
        assert!(!config.active_hours.enabled);
        assert_eq!(config.placement, NotificationPlacement::BottomRight);
        config.validate().unwrap();
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert_eq!(config.breaks.len(), 3);
        assert_eq!(config.placement, NotificationPlacement::BottomRight);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.set_break_config(BreakConfig {
            kind: BreakKind::Short,
            work_duration: WallClock::from_minutes(25),
            break_duration: Some(WallClock::new(0, 1, 30)),
            postpone_duration: WallClock::from_minutes(3),
            enabled: true,
            hooks: Some(HookConfig {
                on_start: Some("play start.wav".to_string()),
                on_end: None,
            }),
        });
        config.active_hours = ActiveHoursConfig {
            start: WallClock::new(8, 30, 0),
            end: WallClock::new(17, 45, 0),
            enabled: true,
            hooks: None,
        };
        config.placement = NotificationPlacement::TopLeft;
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        let short = read_config.break_config(BreakKind::Short);
        assert_eq!(short.work_duration, WallClock::from_minutes(25));
        assert_eq!(short.break_duration, Some(WallClock::new(0, 1, 30)));
        assert_eq!(short.hooks.unwrap().on_start.unwrap(), "play start.wav");
        assert_eq!(read_config.active_hours.start, WallClock::new(8, 30, 0));
        assert!(read_config.active_hours.enabled);
        assert_eq!(read_config.placement, NotificationPlacement::TopLeft);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_break_config_falls_back_to_stock(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.breaks.clear();
        let stretch = config.break_config(BreakKind::Stretch);
        assert_eq!(stretch.kind, BreakKind::Stretch);
        assert_eq!(stretch, BreakConfig::default_for(BreakKind::Stretch));
    }

    #[test]
    fn test_day_break_rejects_duration() {
        let mut config = BreakConfig::default_for(BreakKind::Day);
        config.break_duration = Some(WallClock::from_minutes(5));
        assert_eq!(config.validate(), Err(ConfigError::DayBreakWithDuration));
    }

    #[test]
    fn test_day_break_rejects_end_hook() {
        let mut config = BreakConfig::default_for(BreakKind::Day);
        config.hooks = Some(HookConfig {
            on_start: None,
            on_end: Some("echo done".to_string()),
        });
        assert_eq!(config.validate(), Err(ConfigError::DayBreakWithEndHook));

        // A start hook alone is fine: the workday-over warning may still
        // make a sound.
        config.hooks = Some(HookConfig {
            on_start: Some("echo stop".to_string()),
            on_end: None,
        });
        config.validate().unwrap();
    }

    #[test]
    fn test_short_break_requires_duration() {
        let mut config = BreakConfig::default_for(BreakKind::Short);
        config.break_duration = None;
        assert_eq!(config.validate(), Err(ConfigError::MissingBreakDuration(BreakKind::Short)));
    }

    #[test]
    fn test_inverted_active_hours_rejected() {
        let hours = ActiveHoursConfig {
            start: WallClock::new(18, 0, 0),
            end: WallClock::new(8, 0, 0),
            enabled: true,
            hooks: None,
        };
        assert_eq!(hours.validate(), Err(ConfigError::InvertedActiveHours));
    }

    #[test]
    fn test_parse_time_of_day() {
        use takt::libs::config::parse_time_of_day;

        assert_eq!(parse_time_of_day("08:30").unwrap(), WallClock::new(8, 30, 0));
        assert_eq!(parse_time_of_day(" 23:59 ").unwrap(), WallClock::new(23, 59, 0));
        assert!(parse_time_of_day("24:00").is_err());
        assert!(parse_time_of_day("8").is_err());
        assert!(parse_time_of_day("eight:thirty").is_err());
    }
}
