// Standard library
use std::net::Ipv4Addr;

// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::IpResolveError;

/// A single public-IP discovery method.
///
/// Sources are tried in registration order; the first to produce a
/// well-formed IPv4 address wins and the rest are never asked.
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Attempts to discover the public IPv4 address.
    async fn discover(&self) -> Result<Ipv4Addr, IpResolveError>;
}
