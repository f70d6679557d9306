/// Default base URL of the provider's v2 REST API.
pub const DNSIMPLE_API_BASE: &str = "https://api.dnsimple.com/v2";

/// Account id sentinel meaning "no account selected".
pub const ACCOUNT_WILDCARD: &str = "_";

/// Account id sentinel asking for resolution through `whoami`.
pub const ACCOUNT_AUTO: &str = "auto";

/// HTTP client settings
pub const API_TIMEOUT_SECS: u64 = 30;
