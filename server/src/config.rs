//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (via `dotenvy`) and then builds `ServerConfig` once at
//! startup. LLM settings live separately in `llm::config` because a missing
//! LLM is not fatal.

use std::path::PathBuf;

use shopdesk_client::config::Locale;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROMPT_FILE: &str = "prompts/prompt.txt";
pub const DEFAULT_CHAT_HISTORY_LIMIT: i64 = 50;
pub const MAX_CHAT_HISTORY_LIMIT: i64 = 500;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} required")]
    Missing(&'static str),
    #[error("invalid {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    /// File holding the assistant's base system prompt.
    pub prompt_file: PathBuf,
    /// Number of recorded exchanges served by `GET /chat/history`.
    pub history_limit: i64,
    /// Language of the rendered widget.
    pub locale: Locale,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// - `DATABASE_URL` (required)
    /// - `PORT`: default 3000
    /// - `SYSTEM_PROMPT_FILE`: default `prompts/prompt.txt`
    /// - `CHAT_HISTORY_LIMIT`: `1..=500`, default 50
    /// - `WIDGET_LOCALE`: `en` (default) or `ru`
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let prompt_file = lookup("SYSTEM_PROMPT_FILE").map_or_else(|| PathBuf::from(DEFAULT_PROMPT_FILE), PathBuf::from);

        let history_limit = match lookup("CHAT_HISTORY_LIMIT") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(n) if (1..=MAX_CHAT_HISTORY_LIMIT).contains(&n) => n,
                _ => return Err(ConfigError::Invalid { key: "CHAT_HISTORY_LIMIT", value: raw }),
            },
            None => DEFAULT_CHAT_HISTORY_LIMIT,
        };

        let locale = match lookup("WIDGET_LOCALE") {
            Some(raw) => Locale::from_code(&raw).ok_or(ConfigError::Invalid { key: "WIDGET_LOCALE", value: raw })?,
            None => Locale::default(),
        };

        Ok(Self { database_url, port, prompt_file, history_limit, locale })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
