//! Manage the active hours window.
//!
//! An active hours violation disables the monitor until it is re-enabled
//! here; `takt hours --enable` is the manual reset path after a warning has
//! fired.

use crate::libs::config::{parse_time_of_day, Config};
use crate::libs::messages::Message;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HoursArgs {
    /// Window start as HH:MM
    #[arg(long)]
    start: Option<String>,

    /// Window end as HH:MM
    #[arg(long)]
    end: Option<String>,

    /// Enable active hours monitoring
    #[arg(long, conflicts_with = "disable")]
    enable: bool,

    /// Disable active hours monitoring
    #[arg(long)]
    disable: bool,
}

pub fn cmd(args: HoursArgs) -> Result<()> {
    let mut config = Config::read()?;
    let mut changed = false;

    if let Some(start) = &args.start {
        config.active_hours.start = parse_time_of_day(start)?;
        changed = true;
    }
    if let Some(end) = &args.end {
        config.active_hours.end = parse_time_of_day(end)?;
        changed = true;
    }
    if args.enable {
        config.active_hours.enabled = true;
        msg_success!(Message::ActiveHoursEnabled);
        changed = true;
    }
    if args.disable {
        config.active_hours.enabled = false;
        msg_success!(Message::ActiveHoursDisabled);
        changed = true;
    }

    if changed {
        config.active_hours.validate()?;
        config.save()?;
        if args.start.is_some() || args.end.is_some() {
            msg_success!(Message::ActiveHoursSaved);
        }
        msg_info!(Message::RestartWatchNotice);
        return Ok(());
    }

    let hours = &config.active_hours;
    msg_print!(Message::ActiveHoursStatus(hours.start.to_time_string(), hours.end.to_time_string(), hours.enabled));
    Ok(())
}
