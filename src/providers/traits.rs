// 3rd party crates
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

// Project imports
use crate::providers::dnsimple::errors::DnsimpleError;

/// Transport seam between the command logic and the provider API.
///
/// Every operation goes through [`ApiTransport::send`], one HTTP round
/// trip per call: no retries, no caching, no concurrent requests. Tests
/// substitute a scripted implementation to drive the logic without a
/// network.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Sends one request to `path`, relative to the API base URL, and
    /// returns the parsed JSON response body.
    ///
    /// A body is serialized as JSON with a matching content type.
    /// Responses outside the success range surface as
    /// [`DnsimpleError::Api`] carrying the status and the raw body.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, DnsimpleError>;
}
