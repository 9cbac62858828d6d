//! Scripted transport for native tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use super::error::RequestError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, RequestError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: &Value) -> &Self {
        self.push(Ok(ApiResponse { status, body: body.to_string() }))
    }

    pub fn push_text(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(ApiResponse { status, body: body.to_owned() }))
    }

    pub fn push_network_error(&self) -> &Self {
        self.push(Err(RequestError::Transport("connection refused".to_owned())))
    }

    fn push(&self, response: Result<ApiResponse, RequestError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request recorded")
    }

    /// `(method, url)` pairs in send order.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests().into_iter().map(|r| (r.method, r.url)).collect()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::Transport("no scripted response".to_owned())))
    }
}
