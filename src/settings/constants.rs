// Project imports
use crate::providers::dnsimple::constants::{ACCOUNT_WILDCARD, DNSIMPLE_API_BASE};

/// Environment variable that points at an alternate configuration file.
pub const ENV_CONFIG_PATH: &str = "DDNS_CONFIG_PATH";

/// Prefix for `__`-separated configuration overrides, e.g. DDNS__LOG__LEVEL.
pub const ENV_PREFIX: &str = "DDNS";

/// Credential variables, applied over the file and DDNS__ overrides.
pub const ENV_ACCOUNT_TOKEN: &str = "DNSIMPLE_ACCOUNT_TOKEN";
pub const ENV_ACCOUNT_ID: &str = "DNSIMPLE_ACCOUNT_ID";
pub const ENV_API_URL: &str = "DNSIMPLE_API";

/// Default configuration file location under the user's config directory.
pub const CONFIG_DIR_NAME: &str = "dnsimple-ddns";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default settings
pub const DEFAULT_LOG_LEVEL: &str = "error";

pub fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

pub fn default_api_url() -> String {
    DNSIMPLE_API_BASE.to_string()
}

pub fn default_account_id() -> String {
    ACCOUNT_WILDCARD.to_string()
}
