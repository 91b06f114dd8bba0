//! Terminal implementations of the presenter ports.
//!
//! These make `takt watch` usable without any GUI: break questions become
//! dialoguer selections on a blocking task, countdowns become a plain sleep.
//! A GUI frontend replaces them by implementing the same ports.

use crate::libs::messages::Message;
use crate::libs::ports::{BreakDecision, BreakPrompt, CountdownOutcome, CountdownPresenter, DecisionSignal, NotificationPresenter};
use crate::libs::wall_clock::WallClock;
use crate::{msg_print, msg_warning};
use dialoguer::{theme::ColorfulTheme, Select};
use std::time::Duration;
use tokio::sync::oneshot;

pub struct ConsoleNotificationPresenter;

impl NotificationPresenter for ConsoleNotificationPresenter {
    fn present(&self, prompt: BreakPrompt) -> oneshot::Receiver<DecisionSignal> {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn_blocking(move || {
            let mut items = vec!["Postpone", "Dismiss"];
            if prompt.offer_take_now {
                items.insert(0, "Take a break now");
            }
            let Ok(choice) = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt.message.clone())
                .items(&items)
                .default(0)
                .interact()
            else {
                // No usable terminal: dropping the sender lets the worker
                // reschedule through the no-decision path.
                return;
            };
            let decision = match (prompt.offer_take_now, choice) {
                (true, 0) => BreakDecision::TakeBreak,
                (true, 1) | (false, 0) => BreakDecision::Postpone,
                _ => BreakDecision::Dismiss,
            };
            let _ = tx.send(DecisionSignal { decision, postpone_override: None });
        });
        rx
    }

    fn alert(&self, message: String) {
        msg_warning!(message);
    }

    fn dismiss(&self) {
        // A blocked terminal prompt cannot be torn down from outside; the
        // stale selection is simply ignored once its channel is gone.
    }
}

pub struct ConsoleCountdownPresenter;

impl CountdownPresenter for ConsoleCountdownPresenter {
    fn present(&self, duration: WallClock) -> oneshot::Receiver<CountdownOutcome> {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            msg_print!(Message::CountdownStarted(duration.to_string()));
            tokio::time::sleep(Duration::from_secs(duration.total_seconds().max(0) as u64)).await;
            msg_print!(Message::CountdownFinished);
            let _ = tx.send(CountdownOutcome::Completed);
        });
        rx
    }
}
