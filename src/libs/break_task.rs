//! The per-kind break task and its decision state machine.
//!
//! A `BreakTask` owns one `BreakConfig` plus the execution bookkeeping and
//! the postpone/dismiss counters. The scheduler launches `run` on a worker
//! task when the break is due; the worker presents the decision notification
//! through the collaborator ports, blocks on the answer, applies it, and
//! arms the next cycle before returning.
//!
//! Repeated deferrals escalate: three dismissals or four postpones in a row
//! make the next trigger skip the question and force the break.

use crate::libs::config::{BreakConfig, BreakKind};
use crate::libs::messages::Message;
use crate::libs::ports::{BreakDecision, BreakPrompt, CountdownOutcome, DecisionSignal, HookEvent, Ports};
use crate::libs::schedule::TaskSchedule;
use crate::libs::wall_clock::WallClock;
use crate::{msg_debug, msg_error, msg_info};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Notify;

/// Dismissals in a row before the next trigger forces the break.
pub const DISMISS_ESCALATION_THRESHOLD: u32 = 3;
/// Postpones in a row before the next trigger forces the break.
pub const POSTPONE_ESCALATION_THRESHOLD: u32 = 4;

#[derive(Debug, Clone)]
pub struct BreakTask {
    pub config: BreakConfig,
    pub schedule: TaskSchedule,
    dismiss_count: u32,
    postpone_count: u32,
    current_postpone: WallClock,
}

impl BreakTask {
    /// Builds a task from its config, first due one work interval from `now`.
    pub fn from_config(config: BreakConfig, now: i64) -> Self {
        let schedule = TaskSchedule::new(now, &config.work_duration);
        let current_postpone = config.postpone_duration;
        BreakTask {
            config,
            schedule,
            dismiss_count: 0,
            postpone_count: 0,
            current_postpone,
        }
    }

    /// The decision notification for this kind. The end-of-day break carries
    /// no "take a break now" option since it has no countdown.
    pub fn prompt(&self) -> BreakPrompt {
        let message = match self.config.kind {
            BreakKind::Short => Message::BreakPromptShort,
            BreakKind::Stretch => Message::BreakPromptStretch,
            BreakKind::Day => Message::BreakPromptDay,
        };
        BreakPrompt {
            kind: self.config.kind,
            message: message.to_string(),
            offer_take_now: self.config.kind != BreakKind::Day,
        }
    }

    /// Starts a decision cycle: the postpone distance reverts to the
    /// configured default, so an override only ever lives for one cycle.
    pub fn begin_cycle(&mut self) {
        self.current_postpone = self.config.postpone_duration;
    }

    /// Checks whether the deferral counters have hit their thresholds.
    /// When they have, both counters reset and the caller must force the
    /// break without asking.
    pub fn escalation_due(&mut self) -> bool {
        if self.dismiss_count >= DISMISS_ESCALATION_THRESHOLD || self.postpone_count >= POSTPONE_ESCALATION_THRESHOLD {
            self.reset_counters();
            return true;
        }
        false
    }

    /// Applies a postpone decision, adopting a presenter-supplied override
    /// for this cycle when given.
    pub fn record_postpone(&mut self, now: i64, postpone_override: Option<WallClock>) {
        self.postpone_count += 1;
        if let Some(duration) = postpone_override {
            self.current_postpone = duration;
        }
        self.schedule.update_execution(now, &self.current_postpone);
    }

    /// Applies a dismiss decision; the task comes back after a full work
    /// interval.
    pub fn record_dismiss(&mut self, now: i64) {
        self.dismiss_count += 1;
        self.schedule.update_execution(now, &self.config.work_duration);
    }

    /// Arms the next cycle after a taken (or forced) break.
    pub fn finish_break(&mut self, now: i64) {
        self.schedule.update_execution(now, &self.config.work_duration);
    }

    /// No decision arrived (interruption or a disposed presentation):
    /// reschedule defensively without touching the counters.
    pub fn miss_decision(&mut self, now: i64) {
        self.schedule.update_execution(now, &self.config.work_duration);
    }

    pub fn reset_counters(&mut self) {
        self.dismiss_count = 0;
        self.postpone_count = 0;
    }

    pub fn dismiss_count(&self) -> u32 {
        self.dismiss_count
    }

    pub fn postpone_count(&self) -> u32 {
        self.postpone_count
    }

    pub fn current_postpone(&self) -> WallClock {
        self.current_postpone
    }
}

fn now() -> i64 {
    Utc::now().timestamp()
}

/// Worker entry point for one due break.
///
/// Never fails: collaborator errors and disposed channels all funnel into
/// the "no decision" path, which reschedules the task with its work duration.
/// `interrupt` unblocks any wait promptly and exits through the same path.
pub async fn run(task: Arc<Mutex<BreakTask>>, ports: Ports, interrupt: Arc<Notify>) {
    let (kind, prompt, forced, hooks, break_duration) = {
        let mut t = task.lock();
        if t.schedule.cancelled() {
            return;
        }
        if !t.config.enabled {
            // The due-check must never let a disabled task through.
            debug_assert!(t.config.enabled, "scheduler invoked a disabled break task");
            msg_error!(Message::DisabledTaskInvoked(t.config.kind.to_string()));
            return;
        }
        t.begin_cycle();
        let forced = t.escalation_due();
        (t.config.kind, t.prompt(), forced, t.config.hooks.clone(), t.config.break_duration)
    };

    let signal = if forced {
        if break_duration.is_none() {
            // End-of-day escalation: no countdown exists, raise the one-time
            // stop-working alert and close the cycle.
            ports.notifier.alert(Message::DayForcedStopAlert.to_string());
            task.lock().finish_break(now());
            return;
        }
        msg_info!(Message::BreakForcedAlert(kind.to_string()));
        DecisionSignal {
            decision: BreakDecision::TakeBreak,
            postpone_override: None,
        }
    } else {
        let decision_rx = ports.notifier.present(prompt);
        tokio::select! {
            signal = decision_rx => match signal {
                Ok(signal) => signal,
                Err(_) => {
                    msg_debug!(Message::BreakNoDecision(kind.to_string()));
                    task.lock().miss_decision(now());
                    return;
                }
            },
            _ = interrupt.notified() => {
                ports.notifier.dismiss();
                msg_debug!(Message::BreakWorkerInterrupted(kind.to_string()));
                task.lock().miss_decision(now());
                return;
            }
        }
    };

    match signal.decision {
        BreakDecision::Postpone => {
            let mut t = task.lock();
            t.record_postpone(now(), signal.postpone_override);
            msg_info!(Message::BreakPostponed(kind.to_string(), t.current_postpone().to_string()));
        }
        BreakDecision::Dismiss => {
            task.lock().record_dismiss(now());
            msg_info!(Message::BreakDismissed(kind.to_string()));
        }
        BreakDecision::TakeBreak => {
            let Some(duration) = break_duration else {
                // Only reachable with a misbehaving presenter: the day prompt
                // offers no take-now option.
                task.lock().finish_break(now());
                return;
            };
            if let Some(hooks) = &hooks {
                ports.hooks.run(HookEvent::BreakStart, hooks);
            }
            let countdown_rx = ports.countdown.present(duration);
            tokio::select! {
                outcome = countdown_rx => match outcome {
                    Ok(CountdownOutcome::Completed) => {
                        if let Some(hooks) = &hooks {
                            ports.hooks.run(HookEvent::BreakEnd, hooks);
                        }
                        msg_info!(Message::BreakTaken(kind.to_string()));
                    }
                    Ok(CountdownOutcome::Cancelled) | Err(_) => {
                        ports.hooks.stop();
                        msg_debug!(Message::CountdownCancelled);
                    }
                },
                _ = interrupt.notified() => {
                    ports.hooks.stop();
                    msg_debug!(Message::BreakWorkerInterrupted(kind.to_string()));
                }
            }
            task.lock().finish_break(now());
        }
    }
}
