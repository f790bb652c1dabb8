//! Client configuration: credentials, environment and transport options.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::constants::{PRODUCTION_URL, SANDBOX_URL};

/// Gateway environment the client talks to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Endpoint {
    /// The test environment.
    #[default]
    Sandbox,
    /// The live environment.
    Production,
    /// An externally supplied base URL, e.g. a proxy in front of the
    /// gateway.
    Custom(Url),
}

impl Endpoint {
    /// Returns the base URL for this environment.
    #[must_use]
    pub fn base_url(&self) -> &str {
        match self {
            Self::Sandbox => SANDBOX_URL,
            Self::Production => PRODUCTION_URL,
            Self::Custom(url) => url.as_str(),
        }
    }
}

/// Configuration for [`crate::client::GatewayClient`].
///
/// Credentials are required; everything else has a default. The
/// sandbox environment is targeted unless told otherwise.
pub struct GatewayConfig {
    /// Merchant API username.
    pub username: String,
    /// Merchant API password.
    pub password: String,
    /// Environment to talk to.
    pub endpoint: Endpoint,
    /// HTTP request timeout applied to the built transport client.
    pub timeout: Duration,
    /// Optional pre-configured reqwest client. When set, the timeout
    /// above is not applied; transport settings are the caller's.
    pub http_client: Option<reqwest::Client>,
}

impl GatewayConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a config with the given merchant credentials, targeting
    /// the sandbox environment.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            endpoint: Endpoint::default(),
            timeout: Self::DEFAULT_TIMEOUT,
            http_client: None,
        }
    }

    /// Selects the environment.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Targets the production environment.
    #[must_use]
    pub fn production(self) -> Self {
        self.with_endpoint(Endpoint::Production)
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sandbox_is_the_default_environment() {
        let config = GatewayConfig::new("merchant", "secret");
        assert_eq!(config.endpoint, Endpoint::Sandbox);
        assert_eq!(config.endpoint.base_url(), "https://test.clictopay.com");
        assert_eq!(config.timeout, GatewayConfig::DEFAULT_TIMEOUT);
    }

    #[test]
    fn production_selects_the_live_host() {
        let config = GatewayConfig::new("merchant", "secret").production();
        assert_eq!(config.endpoint.base_url(), "https://api.clictopay.com");
    }

    #[test]
    fn custom_endpoint_keeps_the_supplied_url() {
        let url: Url = "https://proxy.example/gw".parse().expect("valid URL");
        let endpoint = Endpoint::Custom(url);
        assert_eq!(endpoint.base_url(), "https://proxy.example/gw");
    }

    #[test]
    fn debug_redacts_the_password() {
        let config = GatewayConfig::new("merchant", "secret");
        let printed = format!("{config:?}");
        assert!(printed.contains("merchant"));
        assert!(!printed.contains("secret"));
    }
}
