// Standard library
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

// Project imports
use dnsimple_ddns::providers::dnsimple::errors::DnsimpleError;
use dnsimple_ddns::providers::ApiTransport;

/// One request captured by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Scripted transport: replays queued responses in order and records
/// every request it receives.
pub struct MockTransport {
    responses: Mutex<Vec<Result<Value, DnsimpleError>>>,
    calls: Mutex<Vec<RecordedCall>>,
    call_count: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Queues the response served to the next request.
    pub fn push_response(&self, response: Result<Value, DnsimpleError>) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_made(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, DnsimpleError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            panic!("no response queued for request to '{}'", path);
        }
        responses.remove(0)
    }
}
