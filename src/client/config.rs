//! Client configuration options.

use std::time::Duration;

/// Base URL of the production Aplos API.
pub const DEFAULT_BASE_URL: &str = "https://www.aplos.com/hermes/api/v1";

/// Configuration for the Aplos client.
///
/// Every field is optional in the sense that [`ClientConfig::default`]
/// gives a working setup; override individual fields with the `with_*`
/// builders.
///
/// # Example
///
/// ```
/// use aplos_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all API requests. Defaults to the production API;
    /// overriding it points the client at a test server.
    pub base_url: String,
    /// Per-request timeout. An in-flight request past this deadline
    /// fails with [`Error::Timeout`](crate::Error::Timeout).
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("aplos-client/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
