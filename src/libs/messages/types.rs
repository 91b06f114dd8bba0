#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigModuleBreaks,
    ConfigModuleActiveHours,
    ConfigModulePlacement,
    PromptSelectModules,
    PromptBreakEnabled(String),     // kind
    PromptWorkDuration(String),     // kind
    PromptBreakDuration(String),    // kind
    PromptPostponeDuration(String), // kind
    PromptHookOnStart(String),      // kind
    PromptHookOnEnd(String),        // kind
    PromptHoursEnabled,
    PromptHoursStart,
    PromptHoursEnd,
    PromptPlacement,
    InvalidTimeOfDay(String), // input

    // === SCHEDULER MESSAGES ===
    MainLoopStarted,
    MainLoopPaused,
    MainLoopResumed,
    SchedulerShuttingDown,
    SchedulerExitedNormally,
    SchedulerTaskPanicked(String), // error
    SchedulerError(String),        // error
    DisabledTaskInvoked(String),   // kind

    // === BREAK MESSAGES ===
    BreakPromptShort,
    BreakPromptStretch,
    BreakPromptDay,
    BreakForcedAlert(String), // kind
    DayForcedStopAlert,
    BreakTaken(String),           // kind
    BreakPostponed(String, String), // kind, duration
    BreakDismissed(String),       // kind
    BreakNoDecision(String),      // kind
    BreakWorkerInterrupted(String), // kind
    BreakEnabled(String),         // kind
    BreakDisabled(String),        // kind
    BreaksTitle,
    RestartWatchNotice,

    // === ACTIVE HOURS MESSAGES ===
    ActiveHoursBeforeStartAlert(String), // window start
    ActiveHoursAfterEndAlert(String),    // window end
    ActiveHoursViolation(String),        // before-start | after-end
    ActiveHoursSaved,
    ActiveHoursEnabled,
    ActiveHoursDisabled,
    ActiveHoursStatus(String, String, bool), // start, end, enabled

    // === COUNTDOWN MESSAGES ===
    CountdownStarted(String), // duration
    CountdownFinished,
    CountdownCancelled,

    // === HOOK MESSAGES ===
    HookLaunched(String),          // command
    HookLaunchFailed(String, String), // command, error

    // === WATCHER MESSAGES ===
    WatcherStarted(u32), // pid
    WatcherStopped(u32), // pid
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStoppingExisting(String), // pid
    WatcherFailedToStopExisting(String), // error
    WatcherFailedToStop(u32), // pid
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String), // error
    WatcherSignalHandlingNotSupported,
    InvalidPidFileContent,
    DaemonModeNotSupported,
    ProcessTerminationNotSupported,
    FailedToGetCurrentExecutable,
    FailedToOpenProcess(u32),      // error code
    FailedToTerminateProcess(u32), // error code
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,

    // === PLACEMENT MESSAGES ===
    PlacementSaved(String), // placement
}
