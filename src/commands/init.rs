//! Interactive configuration setup command.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {}

/// Runs the setup wizard and saves the resulting configuration.
pub fn cmd(_args: InitArgs) -> Result<()> {
    let config = Config::init()?;
    config.validate()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
