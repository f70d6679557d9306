// Standard library
use std::env;
use std::path::{Path, PathBuf};

// 3rd party crates
use config::{Config, Environment, File};

// Current module imports
use super::constants::{
    default_account_id, default_api_url, default_log_level, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
    ENV_ACCOUNT_ID, ENV_ACCOUNT_TOKEN, ENV_API_URL, ENV_CONFIG_PATH, ENV_PREFIX,
};
use super::errors::SettingsError;
use super::types::{Account, Api, Log, Settings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Api {
    fn default() -> Self {
        Self {
            url: default_api_url(),
        }
    }
}

impl Default for Account {
    fn default() -> Self {
        Self {
            token: String::new(),
            id: default_account_id(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: Log::default(),
            api: Api::default(),
            account: Account::default(),
        }
    }
}

impl Settings {
    /// Loads settings from the optional TOML file and the environment.
    ///
    /// Precedence, lowest to highest: configuration file, `DDNS__*`
    /// variables, `DNSIMPLE_*` variables. Command-line flags are applied
    /// on top by [`Settings::with_overrides`].
    pub fn load(file_override: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();

        if let Some(config_path) = Self::config_path(file_override) {
            // A file named explicitly must exist; the default location
            // is read only when present.
            let required: bool = file_override.is_some() || env::var(ENV_CONFIG_PATH).is_ok();
            builder = builder.add_source(File::from(config_path).required(required));
        }

        let config: Config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;
        settings.apply_env();
        Ok(settings)
    }

    /// Determines the configuration file path.
    fn config_path(file_override: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = file_override {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(ENV_CONFIG_PATH) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Applies the credential environment variables.
    fn apply_env(&mut self) {
        if let Ok(token) = env::var(ENV_ACCOUNT_TOKEN) {
            if !token.is_empty() {
                self.account.token = token;
            }
        }
        if let Ok(id) = env::var(ENV_ACCOUNT_ID) {
            if !id.is_empty() {
                self.account.id = id;
            }
        }
        if let Ok(url) = env::var(ENV_API_URL) {
            if !url.is_empty() {
                self.api.url = url;
            }
        }
    }

    /// Applies command-line overrides, the highest-precedence source.
    pub fn with_overrides(
        mut self,
        token: Option<String>,
        account_id: Option<String>,
        api_url: Option<String>,
    ) -> Self {
        if let Some(token) = token {
            self.account.token = token;
        }
        if let Some(id) = account_id {
            self.account.id = id;
        }
        if let Some(url) = api_url {
            self.api.url = url;
        }
        self
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            _ => Err(SettingsError::InvalidLogLevel(self.log.level.clone())),
        }
    }

    pub fn log_level(&self) -> String {
        self.log.level.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::dnsimple::constants::{ACCOUNT_WILDCARD, DNSIMPLE_API_BASE};

    #[test]
    fn defaults_are_quiet_and_unconfigured() {
        let settings = Settings::default();
        assert_eq!(settings.log.level, "error");
        assert_eq!(settings.api.url, DNSIMPLE_API_BASE);
        assert_eq!(settings.account.id, ACCOUNT_WILDCARD);
        assert!(settings.account.token.is_empty());
    }

    #[test]
    fn cli_overrides_replace_every_field_they_name() {
        let settings = Settings::default().with_overrides(
            Some("token-from-flag".to_string()),
            Some("1385".to_string()),
            Some("https://api.sandbox.dnsimple.com/v2".to_string()),
        );
        assert_eq!(settings.account.token, "token-from-flag");
        assert_eq!(settings.account.id, "1385");
        assert_eq!(settings.api.url, "https://api.sandbox.dnsimple.com/v2");
    }

    #[test]
    fn absent_overrides_leave_settings_untouched() {
        let settings = Settings::default()
            .with_overrides(Some("abc".to_string()), None, None)
            .with_overrides(None, None, None);
        assert_eq!(settings.account.token, "abc");
        assert_eq!(settings.account.id, ACCOUNT_WILDCARD);
        assert_eq!(settings.api.url, DNSIMPLE_API_BASE);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut settings = Settings::default();
        settings.log.level = "verbose".to_string();
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn log_level_is_lowercased() {
        let mut settings = Settings::default();
        settings.log.level = "Debug".to_string();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.log_level(), "debug");
    }
}
