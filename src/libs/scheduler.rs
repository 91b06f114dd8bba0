//! The central break scheduler.
//!
//! One periodic driver calls `tick()` once per second; there is no other
//! clock source. Every tick decides exactly one thing: which single break
//! task, if any, gets to launch its worker. Tasks that are not eligible to
//! run this tick are postponed by the tick interval so their due-ness keeps
//! pace with wall-clock drift, and the active hours window is re-checked at
//! the end of every tick regardless of what else happened.

use crate::libs::active_hours::{self, ActiveHoursMonitor};
use crate::libs::break_task::{self, BreakTask};
use crate::libs::config::{ActiveHoursConfig, BreakConfig, BreakKind, Config};
use crate::libs::error::ConfigError;
use crate::libs::ports::Ports;
use chrono::{Local, Timelike, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// The fixed driver period in seconds.
pub const TICK_INTERVAL_SECONDS: i64 = 1;

/// A spawned worker task plus its interrupt signal.
///
/// Interruption is the only cancellation mechanism: notifying stores a
/// permit, so a worker that has not reached its wait yet still observes it.
struct WorkerHandle {
    join: JoinHandle<()>,
    interrupt: Arc<Notify>,
}

impl WorkerHandle {
    fn is_alive(&self) -> bool {
        !self.join.is_finished()
    }

    fn interrupt(&self) {
        self.interrupt.notify_one();
    }
}

struct RunningBreak {
    kind: BreakKind,
    handle: WorkerHandle,
}

pub struct Scheduler {
    tasks: HashMap<BreakKind, Arc<Mutex<BreakTask>>>,
    hours: ActiveHoursMonitor,
    running: Option<RunningBreak>,
    hours_worker: Option<WorkerHandle>,
    stopped: Arc<AtomicBool>,
    ports: Ports,
}

impl Scheduler {
    /// Builds the scheduler from the stored configuration.
    ///
    /// Every kind gets exactly one task: configured kinds from their entry,
    /// unconfigured ones from a disabled stock entry. A duplicate kind or an
    /// inconsistent break config is a construction error.
    pub fn new(config: &Config, ports: Ports) -> Result<Self, ConfigError> {
        Self::with_time(config, ports, Utc::now().timestamp())
    }

    /// Like `new`, with an explicit start instant for deterministic tests.
    pub fn with_time(config: &Config, ports: Ports, now: i64) -> Result<Self, ConfigError> {
        config.active_hours.validate()?;

        let mut tasks: HashMap<BreakKind, Arc<Mutex<BreakTask>>> = HashMap::new();
        for break_config in &config.breaks {
            break_config.validate()?;
            if tasks.contains_key(&break_config.kind) {
                return Err(ConfigError::DuplicateKind(break_config.kind));
            }
            tasks.insert(break_config.kind, Arc::new(Mutex::new(BreakTask::from_config(break_config.clone(), now))));
        }
        for kind in BreakKind::ALL {
            tasks.entry(kind).or_insert_with(|| {
                let mut stock = BreakConfig::default_for(kind);
                stock.enabled = false;
                Arc::new(Mutex::new(BreakTask::from_config(stock, now)))
            });
        }

        Ok(Scheduler {
            tasks,
            hours: ActiveHoursMonitor::new(config.active_hours.clone()),
            running: None,
            hours_worker: None,
            stopped: Arc::new(AtomicBool::new(false)),
            ports,
        })
    }

    /// One driver tick at the current wall-clock time.
    pub fn tick(&mut self) {
        let now = Local::now();
        let time_of_day = now.time().num_seconds_from_midnight() as i64;
        self.tick_at(now.timestamp(), time_of_day);
    }

    /// One driver tick at an explicit instant.
    ///
    /// `now` is unix-seconds for due checks, `time_of_day` is seconds since
    /// midnight for the active hours window.
    pub fn tick_at(&mut self, now: i64, time_of_day: i64) {
        self.reap_finished();

        if let Some(running) = &self.running {
            let running_kind = running.kind;
            self.postpone_tasks(Some(running_kind));
            self.check_active_hours(time_of_day);
            return;
        }

        if self.stopped.load(Ordering::SeqCst) {
            self.postpone_tasks(None);
            self.check_active_hours(time_of_day);
            return;
        }

        for kind in BreakKind::ALL {
            let task = Arc::clone(&self.tasks[&kind]);
            let due = {
                let t = task.lock();
                t.config.enabled && t.schedule.should_execute(now)
            };
            if due {
                // A stale reference here is already finished or about to be
                // replaced; interrupt it unconditionally before handing the
                // slot to the new worker.
                if let Some(stale) = self.running.take() {
                    stale.handle.interrupt();
                }
                let interrupt = Arc::new(Notify::new());
                let join = tokio::spawn(break_task::run(task, self.ports.clone(), Arc::clone(&interrupt)));
                self.running = Some(RunningBreak {
                    kind,
                    handle: WorkerHandle { join, interrupt },
                });
                break;
            }
        }

        self.check_active_hours(time_of_day);
    }

    /// Shifts every eligible task forward by one tick interval, skipping the
    /// kind that is currently running.
    fn postpone_tasks(&self, except: Option<BreakKind>) {
        for kind in BreakKind::ALL {
            if Some(kind) == except {
                continue;
            }
            let mut task = self.tasks[&kind].lock();
            if task.config.enabled && !task.schedule.cancelled() {
                task.schedule.postpone(TICK_INTERVAL_SECONDS);
            }
        }
    }

    /// Evaluates the active hours window, spawning at most one violation
    /// worker at a time.
    fn check_active_hours(&mut self, time_of_day: i64) {
        if self.hours_worker.as_ref().is_some_and(|w| w.is_alive()) {
            return;
        }
        if let Some(side) = self.hours.check(time_of_day) {
            let interrupt = Arc::new(Notify::new());
            let join = tokio::spawn(active_hours::run_violation(side, self.hours.config().clone(), self.ports.clone()));
            self.hours_worker = Some(WorkerHandle { join, interrupt });
        }
    }

    fn reap_finished(&mut self) {
        if self.running.as_ref().is_some_and(|r| !r.handle.is_alive()) {
            self.running = None;
        }
        if self.hours_worker.as_ref().is_some_and(|w| !w.is_alive()) {
            self.hours_worker = None;
        }
    }

    // ── Facade surface ───────────────────────────────────────────────

    /// Enables or disables one break kind in place. Re-enabling resets the
    /// deferral counters and re-arms the schedule from `now`; mutating the
    /// kind that is currently presenting interrupts its worker so the change
    /// takes effect on the next cycle.
    pub fn set_break_enabled(&mut self, kind: BreakKind, enabled: bool, now: i64) {
        {
            let mut task = self.tasks[&kind].lock();
            let was_enabled = task.config.enabled;
            task.config.enabled = enabled;
            if enabled && !was_enabled {
                task.reset_counters();
                let work = task.config.work_duration;
                task.schedule.update_execution(now, &work);
            }
        }
        self.interrupt_if_running(kind);
    }

    /// Replaces one break config in place and re-arms its schedule from
    /// `now` with the new work duration.
    pub fn apply_break_config(&mut self, config: BreakConfig, now: i64) -> Result<(), ConfigError> {
        config.validate()?;
        let kind = config.kind;
        {
            let mut task = self.tasks[&kind].lock();
            let was_enabled = task.config.enabled;
            task.config = config;
            if task.config.enabled && !was_enabled {
                task.reset_counters();
            }
            task.begin_cycle();
            let work = task.config.work_duration;
            task.schedule.update_execution(now, &work);
        }
        self.interrupt_if_running(kind);
        Ok(())
    }

    pub fn apply_active_hours(&mut self, config: ActiveHoursConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.hours.set_config(config);
        Ok(())
    }

    pub fn set_active_hours_enabled(&mut self, enabled: bool) {
        self.hours.set_enabled(enabled);
    }

    pub fn active_hours(&self) -> &ActiveHoursConfig {
        self.hours.config()
    }

    /// Pauses or resumes the due machinery. While stopped, tasks are
    /// postponed every tick and never become due.
    pub fn set_stopped(&self, stopped: bool) {
        self.stopped.store(stopped, Ordering::SeqCst);
    }

    /// Shared handle to the stop flag, read by the facade without locking.
    pub fn stopped_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stopped)
    }

    pub fn is_break_happening(&self) -> bool {
        self.running.as_ref().is_some_and(|r| r.handle.is_alive())
    }

    pub fn running_kind(&self) -> Option<BreakKind> {
        self.running.as_ref().filter(|r| r.handle.is_alive()).map(|r| r.kind)
    }

    /// Interrupts the break worker when `kind` is the one running.
    pub fn interrupt_if_running(&self, kind: BreakKind) {
        if let Some(running) = &self.running {
            if running.kind == kind {
                running.handle.interrupt();
            }
        }
    }

    /// Interrupts every live worker and hands back the join handles so the
    /// caller can await their exit outside the scheduler lock.
    pub fn interrupt_workers(&mut self) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::new();
        if let Some(running) = self.running.take() {
            running.handle.interrupt();
            handles.push(running.handle.join);
        }
        if let Some(worker) = self.hours_worker.take() {
            worker.interrupt();
            handles.push(worker.join);
        }
        handles
    }

    /// Shared handle to one task, for the facade and for tests.
    pub fn task(&self, kind: BreakKind) -> Arc<Mutex<BreakTask>> {
        Arc::clone(&self.tasks[&kind])
    }

    /// Tasks ordered by next due time; diagnostics only, scheduling uses
    /// the fixed kind order.
    pub fn upcoming(&self) -> Vec<(BreakKind, i64)> {
        let mut entries: Vec<(BreakKind, crate::libs::schedule::TaskSchedule)> = BreakKind::ALL
            .iter()
            .map(|kind| (*kind, self.tasks[kind].lock().schedule))
            .collect();
        entries.sort_by_key(|(_, schedule)| *schedule);
        entries.into_iter().map(|(kind, schedule)| (kind, schedule.next_execution_at())).collect()
    }
}
