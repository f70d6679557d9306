// Standard library
use std::net::Ipv4Addr;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

// Current module imports
use super::constants::{IPV4_ECHO_SERVICES, IP_AUTO, REQUEST_TIMEOUT_SECS};
use super::errors::IpResolveError;
use super::traits::IpSource;
use super::types::{HttpEchoSource, IpResolver, PublicIpSource};

#[async_trait]
impl IpSource for PublicIpSource {
    fn name(&self) -> &str {
        "public-ip"
    }

    async fn discover(&self) -> Result<Ipv4Addr, IpResolveError> {
        match public_ip::addr_v4().await {
            Some(ip) => Ok(ip),
            None => Err(IpResolveError::InvalidResponse {
                service: self.name().to_string(),
                response: "no address reported".to_string(),
            }),
        }
    }
}

#[async_trait]
impl IpSource for HttpEchoSource {
    fn name(&self) -> &str {
        self.name
    }

    async fn discover(&self) -> Result<Ipv4Addr, IpResolveError> {
        let response = self
            .client
            .get(self.url)
            .send()
            .await
            .map_err(|e| IpResolveError::Network {
                service: self.name.to_string(),
                error: e,
            })?;

        let text: String = response.text().await.map_err(|e| IpResolveError::Network {
            service: self.name.to_string(),
            error: e,
        })?;

        text.trim()
            .parse::<Ipv4Addr>()
            .map_err(|_| IpResolveError::InvalidResponse {
                service: self.name.to_string(),
                response: text.trim().to_string(),
            })
    }
}

impl IpResolver {
    /// Builds the default discovery chain: the DNS-based resolvers
    /// first, then the HTTP echo services in table order.
    pub fn new() -> Result<Self, IpResolveError> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let mut sources: Vec<Box<dyn IpSource>> = vec![Box::new(PublicIpSource)];
        for service in &IPV4_ECHO_SERVICES {
            sources.push(Box::new(HttpEchoSource {
                name: service.name,
                url: service.url,
                client: client.clone(),
            }));
        }

        Ok(Self { sources })
    }

    /// Builds a resolver over an explicit source chain.
    pub fn with_sources(sources: Vec<Box<dyn IpSource>>) -> Self {
        Self { sources }
    }

    /// Resolves the IP argument.
    ///
    /// A literal address is parsed and returned without touching the
    /// network; the sentinel walks the discovery chain.
    pub async fn resolve(&self, raw: &str) -> Result<Ipv4Addr, IpResolveError> {
        if raw != IP_AUTO {
            return raw
                .parse::<Ipv4Addr>()
                .map_err(|_| IpResolveError::InvalidIp(raw.to_string()));
        }
        self.discover().await
    }

    /// Walks the source chain and returns the first address discovered.
    ///
    /// Individual failures are logged and swallowed; only an exhausted
    /// chain is an error.
    async fn discover(&self) -> Result<Ipv4Addr, IpResolveError> {
        for source in &self.sources {
            debug!(service = %source.name(), "Querying IP discovery service");
            match source.discover().await {
                Ok(ip) => {
                    info!(service = %source.name(), "Public IPv4 detected: {}", ip);
                    return Ok(ip);
                }
                Err(e) => {
                    warn!(service = %source.name(), error = %e, "IP discovery service failed");
                }
            }
        }
        Err(IpResolveError::NoIpAvailable)
    }
}
