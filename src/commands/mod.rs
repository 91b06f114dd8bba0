pub mod breaks;
pub mod hours;
pub mod init;
pub mod watch;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the break scheduler")]
    Watch(watch::WatchArgs),
    #[command(about = "Show or toggle break timers")]
    Breaks(breaks::BreaksArgs),
    #[command(about = "Manage the active hours window")]
    Hours(hours::HoursArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::Breaks(args) => breaks::cmd(args),
            Commands::Hours(args) => hours::cmd(args),
        }
    }
}
