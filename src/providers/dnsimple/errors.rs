// 3rd party crates
use reqwest::StatusCode;
use thiserror::Error;

/// Error type for provider API operations.
#[derive(Debug, Error)]
pub enum DnsimpleError {
    #[error("Account token is not set; pass --account-token or set DNSIMPLE_ACCOUNT_TOKEN")]
    MissingToken,

    #[error(
        "Account id '_' selects no account; pass --account-id or set \
         DNSIMPLE_ACCOUNT_ID to a concrete id or 'auto'"
    )]
    WildcardAccount,

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("API returned HTTP {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API response is missing field '{0}'")]
    MissingField(&'static str),

    #[error("No record named '{name}' in zone '{zone}'")]
    RecordNotFound { zone: String, name: String },
}
