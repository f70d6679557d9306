// Standard library
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{header, Client, Method, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

// Project imports
use crate::providers::traits::ApiTransport;
use crate::settings::types::Settings;

// Current module imports
use super::constants::API_TIMEOUT_SECS;
use super::errors::DnsimpleError;
use super::types::DnsimpleClient;

impl DnsimpleClient {
    /// Builds an API client from the settings.
    ///
    /// Fails when no token is configured. The token is attached to every
    /// request as a default Authorization header.
    pub fn new(settings: &Settings) -> Result<Self, DnsimpleError> {
        let token: &str = settings.account.token.as_str();
        if token.is_empty() {
            error!("Account token is not set");
            return Err(DnsimpleError::MissingToken);
        }

        // Mark security-sensitive headers with `set_sensitive`.
        let bearer_token: String = format!("Bearer {}", token);
        let mut auth_value: HeaderValue = HeaderValue::from_str(&bearer_token).map_err(|e| {
            error!("Invalid account token format: {}", e);
            DnsimpleError::InvalidHeaderValue(e)
        })?;
        auth_value.set_sensitive(true);

        let mut headers: HeaderMap = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth_value);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        // Build the client.
        let client: Client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(API_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                DnsimpleError::HttpClientBuild(e)
            })?;

        Ok(Self {
            client,
            base_url: settings.api.url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ApiTransport for DnsimpleClient {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, DnsimpleError> {
        let url: String = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        debug!(method = %method, url = %url, "Sending API request");

        let mut request = self.client.request(method, &url);
        if let Some(payload) = &body {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|e| DnsimpleError::Transport {
            url: url.clone(),
            source: e,
        })?;

        let status: StatusCode = response.status();
        let text: String = response.text().await.map_err(|e| DnsimpleError::Transport {
            url: url.clone(),
            source: e,
        })?;

        if !status.is_success() {
            error!(status = %status, url = %url, "API request failed");
            return Err(DnsimpleError::Api { status, body: text });
        }

        debug!(status = %status, url = %url, "Received API response");

        serde_json::from_str(&text).map_err(DnsimpleError::Parse)
    }
}
