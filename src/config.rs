//! Registry API address configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API address
//! is baked in at compile time from `ATLAS_API_ADDR`. Everything that builds
//! request URLs goes through [`ClientConfig`] so the base address is joined
//! in exactly one place.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Compile-time environment variable naming the registry API base address.
pub const API_ADDR_ENV: &str = "ATLAS_API_ADDR";

/// Base address used when `ATLAS_API_ADDR` is not set at build time.
pub const DEFAULT_API_ADDR: &str = "http://localhost:8080/api/v1";

/// Errors produced while building a [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The address was empty after trimming.
    #[error("API address is empty")]
    EmptyAddr,

    /// The address does not use an HTTP scheme.
    #[error("API address must start with http:// or https://: {0}")]
    InvalidScheme(String),
}

/// Client-side configuration for talking to the registry API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_addr: String,
}

impl ClientConfig {
    /// Build a config from an explicit API base address.
    ///
    /// Trailing slashes are stripped so paths can always be appended with a
    /// leading `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the address is empty or not `http(s)`.
    pub fn new(api_addr: &str) -> Result<Self, ConfigError> {
        let trimmed = api_addr.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyAddr);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidScheme(trimmed.to_owned()));
        }
        Ok(Self { api_addr: trimmed.to_owned() })
    }

    /// Build the config from the compile-time environment.
    ///
    /// An invalid `ATLAS_API_ADDR` is logged and replaced by
    /// [`DEFAULT_API_ADDR`] so the app still boots.
    pub fn from_env() -> Self {
        Self::from_raw(option_env!("ATLAS_API_ADDR"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::new(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring {API_ADDR_ENV}: {e}");
                Self::default()
            }
        }
    }

    /// The normalized API base address (no trailing slash).
    pub fn api_addr(&self) -> &str {
        &self.api_addr
    }

    /// Join `path` onto the base address.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_addr)
        } else {
            format!("{}/{path}", self.api_addr)
        }
    }

    /// Where the browser goes to start the server-driven OAuth login.
    pub fn session_start_url(&self) -> String {
        self.url("/session/start")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_addr: DEFAULT_API_ADDR.to_owned() }
    }
}
