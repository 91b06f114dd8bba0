#[cfg(test)]
mod tests {
    use takt::libs::wall_clock::WallClock;

    #[test]
    fn test_seconds_round_trip() {
        // Every valid component combination survives the conversion; minutes
        // and seconds are swept fully, hours cover the whole range.
        for hours in 0..24 {
            for minutes in (0..60).step_by(7) {
                for seconds in 0..60 {
                    let clock = WallClock::new(hours, minutes, seconds);
                    let total = clock.total_seconds();
                    assert_eq!(WallClock::from_seconds(total), clock);
                }
            }
        }
    }

    #[test]
    fn test_total_seconds() {
        assert_eq!(WallClock::new(0, 0, 0).total_seconds(), 0);
        assert_eq!(WallClock::new(0, 1, 30).total_seconds(), 90);
        assert_eq!(WallClock::new(2, 0, 5).total_seconds(), 7205);
        assert_eq!(WallClock::new(23, 59, 59).total_seconds(), 86399);
    }

    #[test]
    fn test_from_seconds_caps_below_one_day() {
        assert_eq!(WallClock::from_seconds(86399), WallClock::new(23, 59, 59));
        assert_eq!(WallClock::from_seconds(86400), WallClock::new(23, 59, 59));
        assert_eq!(WallClock::from_seconds(1_000_000), WallClock::new(23, 59, 59));
        assert_eq!(WallClock::from_seconds(-5), WallClock::new(0, 0, 0));
    }

    #[test]
    fn test_negative_components_fall_back_to_defaults() {
        assert_eq!(WallClock::new(-1, 30, 0), WallClock::new(0, 30, 0));
        assert_eq!(WallClock::new(1, -30, 10), WallClock::new(1, 0, 10));
        assert_eq!(WallClock::new(-1, -1, -1), WallClock::new(0, 0, 0));
    }

    #[test]
    fn test_subtract_seconds() {
        let mut clock = WallClock::new(0, 2, 0);
        assert!(clock.subtract_seconds(30));
        assert_eq!(clock, WallClock::new(0, 1, 30));

        // Subtracting down to exactly zero succeeds.
        assert!(clock.subtract_seconds(90));
        assert!(clock.is_zero());
    }

    #[test]
    fn test_subtract_seconds_floors_at_zero() {
        let mut clock = WallClock::new(0, 0, 0);
        assert!(!clock.subtract_seconds(1));
        assert_eq!(clock, WallClock::new(0, 0, 0));

        // A partial subtraction that would go negative leaves the value
        // untouched instead of clamping.
        let mut clock = WallClock::new(0, 0, 10);
        assert!(!clock.subtract_seconds(11));
        assert_eq!(clock, WallClock::new(0, 0, 10));
    }

    #[test]
    fn test_display_omits_zero_components() {
        assert_eq!(WallClock::new(1, 30, 0).to_string(), "1h 30m");
        assert_eq!(WallClock::new(0, 0, 45).to_string(), "45s");
        assert_eq!(WallClock::new(2, 0, 5).to_string(), "2h 5s");
        assert_eq!(WallClock::new(0, 0, 0).to_string(), "0s");
    }

    #[test]
    fn test_time_of_day_rendering() {
        assert_eq!(WallClock::new(9, 0, 0).to_time_string(), "09:00");
        assert_eq!(WallClock::new(18, 5, 0).to_time_string(), "18:05");
    }
}
