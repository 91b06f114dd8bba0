//! Run the break scheduler, by default as a detached background process.

use crate::libs::daemon;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Run in the foreground instead of spawning a daemon
    #[arg(long)]
    foreground: bool,

    /// Stop a running daemon
    #[arg(long)]
    stop: bool,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }
    if args.foreground {
        return daemon::run_with_signal_handling().await;
    }
    daemon::spawn()
}
