//! Registry HTTP client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `perform` is the single choke point for every registry call: it joins the
//! configured base address, sends through the injected [`Transport`], checks
//! the status, and decodes the body. No retries, no caching; each call is a
//! fresh request.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::RequestError;
use super::transport::{ApiRequest, ApiResponse, BrowserTransport, Method, Transport};
use crate::config::ClientConfig;

/// Cheaply cloneable handle to the registry API.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Client backed by the browser `fetch` transport.
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(config, Arc::new(BrowserTransport))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send `method path` with an optional JSON body and decode the response.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the body cannot be encoded, no response
    /// arrives, the status is not 2xx, or the body does not decode as `T`.
    pub async fn perform<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self.execute(method, path, body).await?;
        serde_json::from_str(&resp.body).map_err(|e| RequestError::Decode(e.to_string()))
    }

    /// Like [`ApiClient::perform`] but discards the response body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on encode, transport, or status failures.
    pub async fn perform_unit(&self, method: Method, path: &str) -> Result<(), RequestError> {
        self.execute::<()>(method, path, None).await.map(|_| ())
    }

    async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<ApiResponse, RequestError>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| RequestError::Encode(e.to_string()))?;
        let request = ApiRequest { method, url: self.config.url(path), body };
        log::debug!("{} {}", method.as_str(), request.url);

        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(RequestError::from_status(resp.status, &resp.body));
        }
        Ok(resp)
    }
}
