// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpResolveError {
    #[error("Network error from {service}: {error}")]
    Network {
        service: String,
        error: reqwest::Error,
    },

    #[error("Invalid response from {service}: {response}")]
    InvalidResponse { service: String, response: String },

    #[error("Invalid IPv4 address '{0}'")]
    InvalidIp(String),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("No IP discovery service returned a usable address")]
    NoIpAvailable,
}
