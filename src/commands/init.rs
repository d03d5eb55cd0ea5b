//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard that configures the remote account
//! service and the rest-timer defaults for first-time use.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command: the interactive wizard by default,
/// or configuration removal when `--delete` is passed.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let path = crate::libs::data_storage::DataStorage::new().get_path(crate::libs::config::CONFIG_FILE_NAME)?;
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
