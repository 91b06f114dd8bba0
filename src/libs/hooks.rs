//! Fire-and-forget execution of user-configured hook commands.
//!
//! Hooks are shell commands attached to break start/end and active hours
//! violations, typically used to play a sound or mute notifications. The
//! runner swallows every failure: a broken hook must never disturb the
//! scheduler.

use crate::libs::config::HookConfig;
use crate::libs::messages::Message;
use crate::libs::ports::{HookEvent, HookRunner};
use crate::{msg_debug, msg_error};
use parking_lot::Mutex;
use std::process::{Child, Command, Stdio};

pub struct CommandHookRunner {
    child: Mutex<Option<Child>>,
}

impl CommandHookRunner {
    pub fn new() -> Self {
        CommandHookRunner { child: Mutex::new(None) }
    }
}

impl Default for CommandHookRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl HookRunner for CommandHookRunner {
    fn run(&self, event: HookEvent, hooks: &HookConfig) {
        let command = match event {
            HookEvent::BreakStart | HookEvent::HoursBeforeStart => &hooks.on_start,
            HookEvent::BreakEnd | HookEvent::HoursAfterEnd => &hooks.on_end,
        };
        let Some(command) = command else {
            return;
        };
        // A still-running previous hook is superseded.
        self.stop();
        match spawn_shell(command) {
            Ok(child) => {
                msg_debug!(Message::HookLaunched(command.clone()));
                *self.child.lock() = Some(child);
            }
            Err(error) => {
                msg_error!(Message::HookLaunchFailed(command.clone(), error.to_string()));
            }
        }
    }

    fn stop(&self) {
        if let Some(mut child) = self.child.lock().take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

#[cfg(unix)]
fn spawn_shell(command: &str) -> std::io::Result<Child> {
    Command::new("sh").arg("-c").arg(command).stdout(Stdio::null()).stderr(Stdio::null()).spawn()
}

#[cfg(windows)]
fn spawn_shell(command: &str) -> std::io::Result<Child> {
    Command::new("cmd").arg("/C").arg(command).stdout(Stdio::null()).stderr(Stdio::null()).spawn()
}
