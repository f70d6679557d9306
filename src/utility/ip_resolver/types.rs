// 3rd party crates
use reqwest::Client;

// Current module imports
use super::traits::IpSource;

/// An HTTP endpoint that reports the caller's address as plain text.
pub struct EchoService {
    pub name: &'static str,
    pub url: &'static str,
}

/// Discovers the public IPv4 address through DNS-based resolvers.
pub struct PublicIpSource;

/// Discovers the public IPv4 address from an HTTP echo service.
pub struct HttpEchoSource {
    pub name: &'static str,
    pub url: &'static str,
    pub client: Client,
}

/// Ordered chain of discovery sources with first-success semantics.
pub struct IpResolver {
    pub sources: Vec<Box<dyn IpSource>>,
}
