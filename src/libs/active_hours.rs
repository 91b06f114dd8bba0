//! Daily active-hours window monitoring.
//!
//! The scheduler evaluates the window on every tick. A violation fires once
//! per episode: detecting one disables the monitor until the facade
//! explicitly re-enables it, so the user is warned a single time instead of
//! every second.

use crate::libs::config::ActiveHoursConfig;
use crate::libs::messages::Message;
use crate::libs::ports::{HookEvent, Ports};
use crate::msg_debug;

/// Which side of the window was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationSide {
    BeforeStart,
    AfterEnd,
}

#[derive(Debug, Clone)]
pub struct ActiveHoursMonitor {
    config: ActiveHoursConfig,
}

impl ActiveHoursMonitor {
    pub fn new(config: ActiveHoursConfig) -> Self {
        ActiveHoursMonitor { config }
    }

    /// Checks `time_of_day` (seconds since midnight) against the window.
    ///
    /// Returns the violated side when monitoring is enabled and the moment
    /// falls outside the window, and disables further firing for this
    /// episode. In-window moments and disabled monitors return `None`.
    pub fn check(&mut self, time_of_day: i64) -> Option<ViolationSide> {
        if !self.config.enabled {
            return None;
        }
        let side = if time_of_day < self.config.start.total_seconds() {
            ViolationSide::BeforeStart
        } else if time_of_day > self.config.end.total_seconds() {
            ViolationSide::AfterEnd
        } else {
            return None;
        };
        self.config.enabled = false;
        Some(side)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn set_config(&mut self, config: ActiveHoursConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ActiveHoursConfig {
        &self.config
    }
}

/// One-shot violation worker: raises the alert and runs the matching hook
/// path, then exits.
pub async fn run_violation(side: ViolationSide, config: ActiveHoursConfig, ports: Ports) {
    let (message, event, side_name) = match side {
        ViolationSide::BeforeStart => (
            Message::ActiveHoursBeforeStartAlert(config.start.to_time_string()),
            HookEvent::HoursBeforeStart,
            "before-start",
        ),
        ViolationSide::AfterEnd => (
            Message::ActiveHoursAfterEndAlert(config.end.to_time_string()),
            HookEvent::HoursAfterEnd,
            "after-end",
        ),
    };
    msg_debug!(Message::ActiveHoursViolation(side_name.to_string()));
    ports.notifier.alert(message.to_string());
    if let Some(hooks) = &config.hooks {
        ports.hooks.run(event, hooks);
    }
}
