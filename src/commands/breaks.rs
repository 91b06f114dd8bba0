//! Show and toggle the configured break timers.
//!
//! Changes are written to the preference store; a running watch daemon reads
//! its configuration at startup, so it must be restarted to pick them up.

use crate::libs::config::{BreakKind, Config};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct BreaksArgs {
    /// Enable a break kind
    #[arg(long, value_enum)]
    enable: Option<BreakKind>,

    /// Disable a break kind
    #[arg(long, value_enum)]
    disable: Option<BreakKind>,
}

pub fn cmd(args: BreaksArgs) -> Result<()> {
    let mut config = Config::read()?;
    let mut changed = false;

    if let Some(kind) = args.enable {
        let mut break_config = config.break_config(kind);
        break_config.enabled = true;
        config.set_break_config(break_config);
        msg_success!(Message::BreakEnabled(kind.to_string()));
        changed = true;
    }
    if let Some(kind) = args.disable {
        let mut break_config = config.break_config(kind);
        break_config.enabled = false;
        config.set_break_config(break_config);
        msg_success!(Message::BreakDisabled(kind.to_string()));
        changed = true;
    }

    if changed {
        config.save()?;
        msg_info!(Message::RestartWatchNotice);
        return Ok(());
    }

    msg_print!(Message::BreaksTitle, true);
    View::breaks(&config.breaks)?;
    Ok(())
}
