// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::constants::{default_account_id, default_api_url, default_log_level};

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Provider API endpoint configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct Api {
    #[serde(default = "default_api_url")]
    pub url: String,
}

/// Account credentials and selection.
#[derive(Debug, Deserialize, Clone)]
pub struct Account {
    /// API token. Must be set before any request is sent.
    #[serde(default)]
    pub token: String,
    /// Account id: a concrete id, "auto", or the "_" wildcard.
    #[serde(default = "default_account_id")]
    pub id: String,
}

/// Application settings, assembled once at startup and passed by
/// reference for the lifetime of the run.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub account: Account,
}
