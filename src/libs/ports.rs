//! Collaborator ports consumed by the scheduling core.
//!
//! The core never renders anything: break questions, countdowns, and hook
//! side effects go through these traits. Presenters answer through oneshot
//! channels so every presentation resolves exactly once; dropping the sender
//! counts as disposal and the waiting worker treats it as "no decision".

use crate::libs::config::{BreakKind, HookConfig};
use crate::libs::wall_clock::WallClock;
use std::sync::Arc;
use tokio::sync::oneshot;

/// What the user chose for a due break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakDecision {
    TakeBreak,
    Postpone,
    Dismiss,
}

/// The single-resolution answer from a notification presentation.
#[derive(Debug, Clone)]
pub struct DecisionSignal {
    pub decision: BreakDecision,
    /// An overridden postpone distance supplied by the presenter, adopted
    /// for the current cycle only.
    pub postpone_override: Option<WallClock>,
}

/// What a presenter needs to show a break question.
#[derive(Debug, Clone)]
pub struct BreakPrompt {
    pub kind: BreakKind,
    pub message: String,
    /// The end-of-day break never offers "take a break now".
    pub offer_take_now: bool,
}

/// How a countdown presentation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    Completed,
    Cancelled,
}

/// Which hook of a `HookConfig` to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    BreakStart,
    BreakEnd,
    HoursBeforeStart,
    HoursAfterEnd,
}

/// Shows break questions and one-way alerts.
pub trait NotificationPresenter: Send + Sync {
    /// Presents a decision notification. The returned channel resolves
    /// exactly once; a dropped sender means the presentation was disposed.
    fn present(&self, prompt: BreakPrompt) -> oneshot::Receiver<DecisionSignal>;

    /// Shows a one-way warning with no decision attached.
    fn alert(&self, message: String);

    /// Tears down any live presentation.
    fn dismiss(&self);
}

/// Shows a break countdown.
pub trait CountdownPresenter: Send + Sync {
    fn present(&self, duration: WallClock) -> oneshot::Receiver<CountdownOutcome>;
}

/// Executes user-configured hook commands. Fire-and-forget: failures are the
/// runner's problem and must never reach the scheduler.
pub trait HookRunner: Send + Sync {
    fn run(&self, event: HookEvent, hooks: &HookConfig);
    fn stop(&self);
}

/// The collaborator bundle handed to every worker.
#[derive(Clone)]
pub struct Ports {
    pub notifier: Arc<dyn NotificationPresenter>,
    pub countdown: Arc<dyn CountdownPresenter>,
    pub hooks: Arc<dyn HookRunner>,
}
