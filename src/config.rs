//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::address_book::{BirthdayWindow, DEFAULT_WINDOW_DAYS};
use std::env;

/// Default prompt printed before each command.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Longest allowed upcoming-birthdays window.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Log level used when neither RUST_LOG nor LOG_LEVEL is set.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt shown before reading each line (default: "Enter a command: ")
    pub prompt: String,

    /// Length of the upcoming-birthdays window in days (default: 7)
    pub birthday_window_days: u32,

    /// Roll birthdays that already passed this year into next year
    /// (default: false)
    pub birthday_wrap_year: bool,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `ASSISTANT_BIRTHDAY_WINDOW_DAYS`: Window length, 1-366 (default: 7)
    /// - `ASSISTANT_BIRTHDAY_WRAP_YEAR`: true/false (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let log_level = Self::log_level_from_env();

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        let birthday_window_days =
            Self::parse_env_u32("ASSISTANT_BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;

        if !(1..=MAX_WINDOW_DAYS).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        let birthday_wrap_year = Self::parse_env_bool("ASSISTANT_BIRTHDAY_WRAP_YEAR", false)?;

        Ok(Config {
            prompt,
            birthday_window_days,
            birthday_wrap_year,
            log_level,
        })
    }

    /// Read `LOG_LEVEL` (default: "error") after loading `.env`.
    ///
    /// Never fails, so logging can be set up before the rest of the
    /// configuration is validated.
    pub fn log_level_from_env() -> String {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
    }

    /// The upcoming-birthdays window described by this configuration.
    pub fn birthday_window(&self) -> BirthdayWindow {
        BirthdayWindow {
            days: self.birthday_window_days,
            wrap_year: self.birthday_wrap_year,
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            birthday_wrap_year: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
