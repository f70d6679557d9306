// 3rd party crates
use thiserror::Error;

// Project imports
use crate::providers::dnsimple::errors::DnsimpleError;
use crate::settings::errors::SettingsError;
use crate::utility::ip_resolver::errors::IpResolveError;

/// Top-level error for a CLI run.
#[derive(Debug, Error)]
pub enum DdnsError {
    #[error(transparent)]
    Api(#[from] DnsimpleError),

    #[error(transparent)]
    Ip(#[from] IpResolveError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
