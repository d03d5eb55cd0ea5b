//! Application configuration management.
//!
//! Settings live in a JSON file inside the platform data directory. Every
//! module is optional: a missing section simply leaves that feature
//! unconfigured, so a fresh install works without any setup. The `init`
//! command drives the interactive wizard below to create or update the file.
//!
//! ## Configured modules
//!
//! - **Remote**: account service endpoint and API key for sign-in and
//!   profile sync.
//! - **Timer**: default rest duration and countdown refresh cadence.
//!
//! Passwords are never written here; credential caching goes through the
//! encrypted secret storage instead.

use super::data_storage::DataStorage;
use crate::api::remote::RemoteConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown by the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique key used for configuration routing
    pub key: String,
    /// Display name shown during interactive setup
    pub name: String,
}

/// Rest-timer defaults applied when the `timer` command is invoked without
/// an explicit duration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimerDefaults {
    /// Default rest duration, hours component.
    pub hours: u32,
    /// Default rest duration, minutes component.
    pub minutes: u32,
    /// Default rest duration, seconds component.
    pub seconds: u32,
    /// Countdown refresh interval in milliseconds.
    ///
    /// Only affects display smoothness; the remaining time is always
    /// recomputed from the absolute end instant, so a slow cadence never
    /// makes the countdown late.
    pub tick_interval_ms: u64,
}

impl Default for TimerDefaults {
    // Five minutes at four refreshes a second.
    fn default() -> Self {
        TimerDefaults {
            hours: 0,
            minutes: 5,
            seconds: 0,
            tick_interval_ms: 250,
        }
    }
}

/// Root configuration object. Each section is independent and optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Remote account service connection parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,

    /// Rest timer defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerDefaults>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when none
    /// exists. A present-but-corrupt file is an error; silently ignoring it
    /// would throw away the user's remote credentials.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard and returns the updated
    /// configuration, ready for [`Config::save`]. Existing values are
    /// offered as defaults so re-running only edits what the user selects.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let module_list = vec![
            RemoteConfig::module(),
            ConfigModule {
                key: "timer".to_string(),
                name: "Timer".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&module_list.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match module_list[selection].key.as_str() {
                "remote" => config.remote = Some(RemoteConfig::init(&config.remote)?),
                "timer" => {
                    let default = config.timer.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTimer);
                    config.timer = Some(TimerDefaults {
                        hours: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultHours.to_string())
                            .default(default.hours)
                            .interact_text()?,
                        minutes: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultMinutes.to_string())
                            .default(default.minutes)
                            .interact_text()?,
                        seconds: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultSeconds.to_string())
                            .default(default.seconds)
                            .interact_text()?,
                        tick_interval_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTickIntervalMs.to_string())
                            .default(default.tick_interval_ms)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
