//! HTTP transport seam under the API client.
//!
//! In the browser build (`csr`): real `fetch` calls via `gloo-net`, sending
//! the registry session cookie with every request.
//! Native builds: every request fails with a transport error since the
//! session cookie only lives in the browser.
//!
//! The [`Transport`] trait exists so the session store can be exercised in
//! native tests with a scripted transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde_json::Value;

use super::error::RequestError;

/// HTTP verbs used by the registry API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully-resolved request ready for the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL (base address already joined).
    pub url: String,
    pub body: Option<Value>,
}

/// Raw response: status plus the unparsed body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations only report failures where no response exists; status
/// interpretation belongs to the caller.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError>;
}

/// `fetch`-backed transport with credentials included.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Delete => Request::delete(&request.url),
            }
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json");

            let built = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| RequestError::Encode(e.to_string()))?;

            let resp = built
                .send()
                .await
                .map_err(|e| RequestError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| RequestError::Transport(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(RequestError::Transport("not available outside the browser".to_owned()))
        }
    }
}
