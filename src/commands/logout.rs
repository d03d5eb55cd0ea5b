//! Account sign-out command.

use crate::api::remote::Remote;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the logout command. No options today.
#[derive(Debug, Args)]
pub struct LogoutArgs {}

pub fn cmd(_logout_args: LogoutArgs) -> Result<()> {
    if !Remote::has_session() {
        msg_print!(Message::NotLoggedIn);
        return Ok(());
    }

    let Some(remote_config) = Config::read()?.remote else {
        msg_error!(Message::RemoteNotConfigured);
        return Ok(());
    };

    Remote::new(&remote_config).clear_session()?;
    msg_success!(Message::SignedOut);
    Ok(())
}
