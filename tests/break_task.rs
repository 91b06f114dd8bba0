#[cfg(test)]
mod tests {
    use takt::libs::break_task::{BreakTask, DISMISS_ESCALATION_THRESHOLD, POSTPONE_ESCALATION_THRESHOLD};
    use takt::libs::config::{BreakConfig, BreakKind};
    use takt::libs::wall_clock::WallClock;

    /// A short break due 5 seconds after `now`, postponable by 2 seconds.
    fn short_task(now: i64) -> BreakTask {
        let config = BreakConfig {
            kind: BreakKind::Short,
            work_duration: WallClock::new(0, 0, 5),
            break_duration: Some(WallClock::new(0, 0, 1)),
            postpone_duration: WallClock::new(0, 0, 2),
            enabled: true,
            hooks: None,
        };
        BreakTask::from_config(config, now)
    }

    #[test]
    fn test_initial_schedule_arms_one_work_interval_out() {
        let task = short_task(1000);
        assert!(!task.schedule.should_execute(1004));
        assert!(task.schedule.should_execute(1005));
    }

    #[test]
    fn test_postpone_reschedules_by_postpone_duration_not_work() {
        let mut task = short_task(1000);
        assert!(task.schedule.should_execute(1005));

        task.record_postpone(1005, None);
        assert_eq!(task.postpone_count(), 1);
        // Due again after the 2-second postpone distance, not the 5-second
        // work interval.
        assert!(!task.schedule.should_execute(1006));
        assert!(task.schedule.should_execute(1007));
    }

    #[test]
    fn test_dismiss_reschedules_by_work_duration() {
        let mut task = short_task(1000);
        task.record_dismiss(1005);
        assert_eq!(task.dismiss_count(), 1);
        assert!(!task.schedule.should_execute(1009));
        assert!(task.schedule.should_execute(1010));
    }

    #[test]
    fn test_dismiss_escalation_threshold() {
        let mut task = short_task(1000);
        for _ in 0..DISMISS_ESCALATION_THRESHOLD {
            assert!(!task.escalation_due());
            task.record_dismiss(1005);
        }
        assert_eq!(task.dismiss_count(), 3);

        // The fourth trigger forces the break and clears both counters.
        assert!(task.escalation_due());
        assert_eq!(task.dismiss_count(), 0);
        assert_eq!(task.postpone_count(), 0);
        assert!(!task.escalation_due());
    }

    #[test]
    fn test_postpone_escalation_threshold() {
        let mut task = short_task(1000);
        for _ in 0..POSTPONE_ESCALATION_THRESHOLD {
            assert!(!task.escalation_due());
            task.record_postpone(1005, None);
        }
        assert_eq!(task.postpone_count(), 4);

        assert!(task.escalation_due());
        assert_eq!(task.postpone_count(), 0);
    }

    #[test]
    fn test_postpone_override_lives_for_one_cycle() {
        let mut task = short_task(1000);
        task.begin_cycle();
        task.record_postpone(1005, Some(WallClock::new(0, 0, 10)));
        assert_eq!(task.current_postpone(), WallClock::new(0, 0, 10));
        assert!(task.schedule.should_execute(1015));

        // The next cycle reverts to the configured default.
        task.begin_cycle();
        assert_eq!(task.current_postpone(), WallClock::new(0, 0, 2));
        task.record_postpone(1020, None);
        assert_eq!(task.schedule.next_execution_at(), 1022);
    }

    #[test]
    fn test_miss_decision_keeps_counters() {
        let mut task = short_task(1000);
        task.record_dismiss(1005);
        task.record_postpone(1010, None);

        task.miss_decision(1012);
        assert_eq!(task.dismiss_count(), 1);
        assert_eq!(task.postpone_count(), 1);
        // Rescheduled defensively with the work duration.
        assert_eq!(task.schedule.next_execution_at(), 1017);
    }

    #[test]
    fn test_reenabling_resets_counters() {
        let mut task = short_task(1000);
        task.record_dismiss(1005);
        task.record_dismiss(1010);
        task.reset_counters();
        assert_eq!(task.dismiss_count(), 0);
        assert_eq!(task.postpone_count(), 0);
    }

    #[test]
    fn test_prompt_take_now_option_per_kind() {
        let short = short_task(0);
        assert!(short.prompt().offer_take_now);
        assert_eq!(short.prompt().kind, BreakKind::Short);

        let day = BreakTask::from_config(BreakConfig::default_for(BreakKind::Day), 0);
        assert!(!day.prompt().offer_take_now);
        assert!(!day.prompt().message.is_empty());
    }
}
