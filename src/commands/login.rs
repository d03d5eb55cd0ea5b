//! Account sign-in and sign-up command.

use crate::api::remote::{Remote, RemoteError, UserRecord};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

/// Command-line arguments for the login command.
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Create a new account instead of signing in
    #[arg(long)]
    signup: bool,
}

pub async fn cmd(login_args: LoginArgs) -> Result<()> {
    let Some(remote_config) = Config::read()?.remote else {
        msg_error!(Message::RemoteNotConfigured);
        return Ok(());
    };
    let mut remote = Remote::new(&remote_config);

    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEmail.to_string())
        .interact_text()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAccountPassword.to_string())
        .interact()?;

    if login_args.signup {
        let username: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUsername.to_string())
            .allow_empty(true)
            .interact_text()?;
        let username = if username.is_empty() { None } else { Some(username) };

        match remote.sign_up(&email, &password, username).await {
            Ok(_) => msg_success!(Message::SignedUp(email)),
            Err(RemoteError::InvalidCredentials) => msg_error!(Message::AuthFailed("invalid credentials".to_string())),
            Err(e) => msg_error!(Message::AuthFailed(e.to_string())),
        }
        return Ok(());
    }

    let session = match remote.sign_in(&email, &password).await {
        Ok(session) => session,
        Err(RemoteError::InvalidCredentials) => {
            msg_error!(Message::AuthFailed("invalid credentials".to_string()));
            return Ok(());
        }
        Err(e) => {
            msg_error!(Message::AuthFailed(e.to_string()));
            return Ok(());
        }
    };

    // Make sure the profile row exists; accounts created outside this CLI
    // may not have one yet.
    match remote.fetch_profile(&session.user.id, &email).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            let record = UserRecord::new(&session.user.id, &email, None);
            if remote.save_profile(&record).await.is_ok() {
                msg_print!(Message::ProfileSaved);
            }
        }
        Err(e) => msg_debug!(format!("profile lookup failed: {e}")),
    }

    msg_success!(Message::SignedIn(email));
    Ok(())
}
