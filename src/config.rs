//! Application configuration loaded from environment variables.
//!
//! Credentials (client ID/secret, access token) are passed per command and
//! are not part of this struct.

use crate::services::export::MAX_PAGE_SIZE;
use crate::services::oauth::{DEFAULT_OAUTH_BASE_URL, DEFAULT_REDIRECT_URI};
use crate::services::strava::DEFAULT_API_BASE_URL;
use std::env;
use std::path::PathBuf;

/// Log output format for the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava REST API base URL
    pub api_base_url: String,
    /// Strava OAuth base URL
    pub oauth_base_url: String,
    /// Redirect URI registered for the application
    pub redirect_uri: String,
    /// Console log format
    pub log_format: LogFormat,
    /// File receiving client logs while activities are being updated
    pub update_log_path: PathBuf,
    /// Activities requested per page when exporting
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            oauth_base_url: DEFAULT_OAUTH_BASE_URL.to_string(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            log_format: LogFormat::Pretty,
            update_log_path: PathBuf::from(".stravalib"),
            page_size: MAX_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let log_format = match env::var("RENAMER_LOG_FORMAT") {
            Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" | "" => LogFormat::Pretty,
                _ => return Err(ConfigError::Invalid("RENAMER_LOG_FORMAT", v)),
            },
            Err(_) => defaults.log_format,
        };

        let page_size = match env::var("RENAMER_PAGE_SIZE") {
            Ok(v) => match v.trim().parse::<u32>() {
                Ok(n) if (1..=MAX_PAGE_SIZE).contains(&n) => n,
                _ => return Err(ConfigError::Invalid("RENAMER_PAGE_SIZE", v)),
            },
            Err(_) => defaults.page_size,
        };

        Ok(Self {
            api_base_url: env::var("STRAVA_API_BASE_URL").unwrap_or(defaults.api_base_url),
            oauth_base_url: env::var("STRAVA_OAUTH_BASE_URL").unwrap_or(defaults.oauth_base_url),
            redirect_uri: env::var("STRAVA_REDIRECT_URI").unwrap_or(defaults.redirect_uri),
            log_format,
            update_log_path: env::var("RENAMER_UPDATE_LOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.update_log_path),
            page_size,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
