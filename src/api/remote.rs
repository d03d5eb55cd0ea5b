//! Remote account service client.
//!
//! Talks to the hosted auth/database service that keeps user accounts and
//! profiles. The client owns session handling: a bearer token is cached in
//! the data directory after sign-in, and a 401 response clears the cache and
//! re-authenticates with the stored credential before retrying, up to a
//! small fixed count.

use crate::libs::config::ConfigModule;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use chrono::Utc;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fs;

const MAX_RETRY_COUNT: i32 = 3;
const SESSION_FILE: &str = ".remote_session";
const SECRET_FILE: &str = ".remote_secret";
const SIGNUP_URL: &str = "auth/v1/signup";
const TOKEN_URL: &str = "auth/v1/token?grant_type=password";
const USERS_URL: &str = "rest/v1/users";

/// Connection parameters for the account service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RemoteConfig {
    /// Base URL of the service, e.g. `https://project.example.co`.
    pub api_url: String,
    /// Public API key sent with every request.
    pub api_key: String,
}

impl RemoteConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "remote".to_string(),
            name: "Remote".to_string(),
        }
    }

    /// Interactive setup for the remote module, pre-filling existing values.
    pub fn init(existing: &Option<RemoteConfig>) -> anyhow::Result<Self> {
        let default = existing.clone().unwrap_or(RemoteConfig {
            api_url: "".to_string(),
            api_key: "".to_string(),
        });
        crate::msg_print!(Message::ConfigModuleRemote);
        Ok(RemoteConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteApiKey.to_string())
                .default(default.api_key)
                .interact_text()?,
        })
    }
}

/// Typed failures surfaced to the login/logout commands.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("request failed with status {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct Credentials {
    email: String,
    password: String,
}

/// Authenticated session returned by the auth endpoints.
#[derive(Debug, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: SessionUser,
}

#[derive(Debug, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
}

/// Profile row stored in the service's `users` table.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub created_at: String,
}

impl UserRecord {
    pub fn new(user_id: &str, email: &str, username: Option<String>) -> Self {
        Self {
            id: user_id.to_string(),
            email: email.to_string(),
            username,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// HTTP client for the remote user store.
pub struct Remote {
    client: Client,
    config: RemoteConfig,
    secret: Secret,
    retries: i32,
}

impl Remote {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            secret: Secret::new(SECRET_FILE, &Message::PromptAccountPassword.to_string()),
            retries: 0,
        }
    }

    /// Creates an account and stores the initial profile row. The session is
    /// cached so the user is signed in immediately afterwards.
    pub async fn sign_up(&mut self, email: &str, password: &str, username: Option<String>) -> Result<Session, RemoteError> {
        let url = format!("{}/{}", self.config.api_url, SIGNUP_URL);
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let res = self
            .client
            .post(url)
            .header("apikey", &self.config.api_key)
            .json(&credentials)
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => {
                let session: Session = res.json().await?;
                self.store_session_token(&session.access_token)?;
                let record = UserRecord::new(&session.user.id, email, username);
                // Profile creation is best-effort; the account exists either way.
                if let Err(e) = self.save_profile(&record).await {
                    tracing::warn!("profile row was not created: {e}");
                }
                Ok(session)
            }
            StatusCode::UNPROCESSABLE_ENTITY | StatusCode::BAD_REQUEST => Err(RemoteError::InvalidCredentials),
            status => Err(RemoteError::Status(status)),
        }
    }

    /// Exchanges credentials for a bearer session and caches the token.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, RemoteError> {
        let url = format!("{}/{}", self.config.api_url, TOKEN_URL);
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let res = self
            .client
            .post(url)
            .header("apikey", &self.config.api_key)
            .json(&credentials)
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => {
                let session: Session = res.json().await?;
                self.store_session_token(&session.access_token)?;
                Ok(session)
            }
            StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST => Err(RemoteError::InvalidCredentials),
            status => Err(RemoteError::Status(status)),
        }
    }

    /// Inserts or updates the caller's profile row.
    pub async fn save_profile(&mut self, record: &UserRecord) -> Result<(), RemoteError> {
        loop {
            let token = self.session_token()?;
            let url = format!("{}/{}", self.config.api_url, USERS_URL);

            let res = self
                .client
                .post(&url)
                .header("apikey", &self.config.api_key)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .json(record)
                .send()
                .await?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => {
                    self.reauthenticate(&record.email).await?;
                    continue;
                }
                status if status.is_success() => return Ok(()),
                status => return Err(RemoteError::Status(status)),
            }
        }
    }

    /// Fetches the profile row for a user id, `None` when absent.
    pub async fn fetch_profile(&mut self, user_id: &str, email: &str) -> Result<Option<UserRecord>, RemoteError> {
        loop {
            let token = self.session_token()?;
            let url = format!("{}/{}?id=eq.{}", self.config.api_url, USERS_URL, user_id);

            let res = self
                .client
                .get(&url)
                .header("apikey", &self.config.api_key)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .send()
                .await?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => {
                    self.reauthenticate(email).await?;
                    continue;
                }
                status if status.is_success() => {
                    let mut rows: Vec<UserRecord> = res.json().await?;
                    return Ok(if rows.is_empty() { None } else { Some(rows.remove(0)) });
                }
                status => return Err(RemoteError::Status(status)),
            }
        }
    }

    /// Whether a session token is currently cached.
    pub fn has_session() -> bool {
        DataStorage::new()
            .get_path(SESSION_FILE)
            .map(|p| p.exists())
            .unwrap_or(false)
    }

    /// Drops the cached session and credential. Idempotent.
    pub fn clear_session(&self) -> anyhow::Result<()> {
        let session_path = DataStorage::new().get_path(SESSION_FILE)?;
        if session_path.exists() {
            fs::remove_file(session_path)?;
        }
        self.secret.forget()?;
        Ok(())
    }

    // A dropped or expired token: clear it, re-derive the password from the
    // encrypted cache (prompting only when that is gone too), sign in again.
    async fn reauthenticate(&mut self, email: &str) -> Result<(), RemoteError> {
        self.retries += 1;
        let session_path = DataStorage::new().get_path(SESSION_FILE).map_err(anyhow::Error::from)?;
        if session_path.exists() {
            fs::remove_file(&session_path).map_err(anyhow::Error::from)?;
        }
        tokio::time::sleep(std::time::Duration::from_secs(1)).await;
        let password = self.secret.get_or_prompt()?;
        self.sign_in(email, &password).await?;
        Ok(())
    }

    fn session_token(&self) -> Result<String, RemoteError> {
        let path = DataStorage::new().get_path(SESSION_FILE).map_err(anyhow::Error::from)?;
        if !path.exists() {
            return Err(RemoteError::InvalidCredentials);
        }
        Ok(fs::read_to_string(path).map_err(anyhow::Error::from)?.trim().to_string())
    }

    fn store_session_token(&self, token: &str) -> Result<(), RemoteError> {
        let path = DataStorage::new().get_path(SESSION_FILE).map_err(anyhow::Error::from)?;
        fs::write(path, token).map_err(anyhow::Error::from)?;
        Ok(())
    }
}
