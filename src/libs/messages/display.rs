//! Display implementation for takt application messages.
//!
//! All user-facing text is defined here, in one place, so wording stays
//! consistent and the rest of the code deals only in `Message` values.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigModuleBreaks => "Break reminder settings".to_string(),
            Message::ConfigModuleActiveHours => "Active hours settings".to_string(),
            Message::ConfigModulePlacement => "Notification placement".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptBreakEnabled(kind) => format!("Enable the {} break?", kind),
            Message::PromptWorkDuration(kind) => format!("Work duration before a {} break (minutes)", kind),
            Message::PromptBreakDuration(kind) => format!("Length of the {} break (minutes)", kind),
            Message::PromptPostponeDuration(kind) => format!("Postpone duration for the {} break (minutes)", kind),
            Message::PromptHookOnStart(kind) => format!("Command to run when the {} break starts (empty for none)", kind),
            Message::PromptHookOnEnd(kind) => format!("Command to run when the {} break ends (empty for none)", kind),
            Message::PromptHoursEnabled => "Enable active hours monitoring?".to_string(),
            Message::PromptHoursStart => "Active hours start (HH:MM)".to_string(),
            Message::PromptHoursEnd => "Active hours end (HH:MM)".to_string(),
            Message::PromptPlacement => "Preferred notification placement".to_string(),
            Message::InvalidTimeOfDay(input) => format!("'{}' is not a valid time of day, expected HH:MM", input),

            // === SCHEDULER MESSAGES ===
            Message::MainLoopStarted => "Break scheduler main loop started".to_string(),
            Message::MainLoopPaused => "Break scheduler paused. Timers keep their distance to the next break.".to_string(),
            Message::MainLoopResumed => "Break scheduler resumed".to_string(),
            Message::SchedulerShuttingDown => "Shutting down break scheduler...".to_string(),
            Message::SchedulerExitedNormally => "Scheduler exited normally".to_string(),
            Message::SchedulerTaskPanicked(error) => format!("Scheduler task panicked: {}", error),
            Message::SchedulerError(error) => format!("Scheduler error: {}", error),
            Message::DisabledTaskInvoked(kind) => format!("Scheduler invoked the disabled {} break task, this is a bug", kind),

            // === BREAK MESSAGES ===
            Message::BreakPromptShort => "Time for a short break! Rest your eyes for a moment.".to_string(),
            Message::BreakPromptStretch => "Time to stretch! Stand up and move around.".to_string(),
            Message::BreakPromptDay => "Your workday is over. Time to stop working.".to_string(),
            Message::BreakForcedAlert(kind) => format!("You have put off the {} break long enough. Starting it now.", kind),
            Message::DayForcedStopAlert => "You really need to stop working now.".to_string(),
            Message::BreakTaken(kind) => format!("{} break finished", kind),
            Message::BreakPostponed(kind, duration) => format!("{} break postponed for {}", kind, duration),
            Message::BreakDismissed(kind) => format!("{} break dismissed", kind),
            Message::BreakNoDecision(kind) => format!("No decision for the {} break, rescheduling", kind),
            Message::BreakWorkerInterrupted(kind) => format!("{} break worker interrupted", kind),
            Message::BreakEnabled(kind) => format!("{} break enabled", kind),
            Message::BreakDisabled(kind) => format!("{} break disabled", kind),
            Message::BreaksTitle => "Break timers".to_string(),
            Message::RestartWatchNotice => "Restart 'takt watch' for the running scheduler to pick up the change.".to_string(),

            // === ACTIVE HOURS MESSAGES ===
            Message::ActiveHoursBeforeStartAlert(start) => format!("You are working before your active hours start at {}.", start),
            Message::ActiveHoursAfterEndAlert(end) => format!("You are working past your active hours end at {}.", end),
            Message::ActiveHoursViolation(side) => format!("Active hours violation: {}", side),
            Message::ActiveHoursSaved => "Active hours saved".to_string(),
            Message::ActiveHoursEnabled => "Active hours monitoring enabled".to_string(),
            Message::ActiveHoursDisabled => "Active hours monitoring disabled".to_string(),
            Message::ActiveHoursStatus(start, end, enabled) => {
                format!("Active hours: {} - {} ({})", start, end, if *enabled { "enabled" } else { "disabled" })
            }

            // === COUNTDOWN MESSAGES ===
            Message::CountdownStarted(duration) => format!("Break started, back to work in {}", duration),
            Message::CountdownFinished => "Break is over, back to work!".to_string(),
            Message::CountdownCancelled => "Break cancelled".to_string(),

            // === HOOK MESSAGES ===
            Message::HookLaunched(command) => format!("Hook launched: {}", command),
            Message::HookLaunchFailed(command, error) => format!("Failed to launch hook '{}': {}", command, error),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted(pid) => format!("Watcher started with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Watcher with PID {} stopped", pid),
            Message::WatcherNotRunning => "Watcher is not running".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watcher is not running (PID file not found)".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watcher with PID: {}", pid),
            Message::WatcherFailedToStopExisting(error) => format!("Failed to stop existing watcher: {}", error),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watcher with PID: {}", pid),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down...".to_string(),
            Message::WatcherCtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
            Message::WatcherSignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),
            Message::InvalidPidFileContent => "Invalid PID file content".to_string(),
            Message::DaemonModeNotSupported => "Daemon mode is not supported on this platform".to_string(),
            Message::ProcessTerminationNotSupported => "Process termination is not supported on this platform".to_string(),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process, error code: {}", code),
            Message::FailedToTerminateProcess(code) => format!("Failed to terminate process, error code: {}", code),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),

            // === PLACEMENT MESSAGES ===
            Message::PlacementSaved(placement) => format!("Notification placement set to {}", placement),
        };
        write!(f, "{}", text)
    }
}
