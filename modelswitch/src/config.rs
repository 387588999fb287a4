//! Endpoint configuration resolved from the environment.
//!
//! ```rust
//! use modelswitch::EndpointConfig;
//!
//! let config = EndpointConfig::from_lookup(|_| None);
//! assert_eq!(config.base_url, "http://localhost:8000");
//!
//! let config = EndpointConfig::from_lookup(|key| {
//!     (key == "MODELSWITCH_BACKEND_URL").then(|| "https://chat.example.com".to_string())
//! });
//! assert_eq!(config.base_url, "https://chat.example.com");
//! ```

use mprovider::http::DEFAULT_BASE_URL;

pub const BACKEND_URL_ENV: &str = "MODELSWITCH_BACKEND_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub base_url: String,
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Configured value when present and non-blank, otherwise the local default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BACKEND_URL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { base_url }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
