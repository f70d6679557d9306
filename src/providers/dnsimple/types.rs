// 3rd party crates
use reqwest::Client;

/// Client for the provider's REST API.
///
/// Carries the HTTP client, with the bearer token installed as a
/// sensitive default header, and the base URL request paths are joined
/// to. One instance serves a whole CLI run.
#[derive(Debug, Clone)]
pub struct DnsimpleClient {
    pub client: Client,
    pub base_url: String,
}
