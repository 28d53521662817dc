//! Sidecar connection configuration.

use colloquy_error::{ConfigError, ConfigErrorKind};
use std::time::Duration;

const ENDPOINT_VAR: &str = "DAPR_HTTP_ENDPOINT";
const PORT_VAR: &str = "DAPR_HTTP_PORT";
const TOKEN_VAR: &str = "DAPR_API_TOKEN";

const DEFAULT_HTTP_PORT: u16 = 3500;

// The original example configures no timeout and hangs if the sidecar
// does; a bounded default is used here instead.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to find the sidecar and how to talk to it.
///
/// # Examples
///
/// ```
/// use colloquy_client::SidecarConfig;
///
/// let config = SidecarConfig::default();
/// assert_eq!(config.base_url(), "http://127.0.0.1:3500");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidecarConfig {
    base_url: String,
    api_token: Option<String>,
    timeout: Duration,
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            base_url: format!("http://127.0.0.1:{DEFAULT_HTTP_PORT}"),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SidecarConfig {
    /// Builds a configuration from the environment.
    ///
    /// `DAPR_HTTP_ENDPOINT` (a full URL) wins when set; otherwise
    /// `DAPR_HTTP_PORT` selects the port on localhost. `DAPR_API_TOKEN`
    /// is forwarded on every request when present. Missing variables
    /// fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `DAPR_HTTP_PORT` is set but not a valid port,
    /// or if `DAPR_HTTP_ENDPOINT` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var(ENDPOINT_VAR) {
            let endpoint = endpoint.trim().trim_end_matches('/');
            if endpoint.is_empty() {
                return Err(ConfigError::new(ConfigErrorKind::EmptyEndpoint {
                    variable: ENDPOINT_VAR,
                }));
            }
            config.base_url = endpoint.to_string();
        } else if let Ok(port) = std::env::var(PORT_VAR) {
            let parsed: u16 = port.parse().map_err(|_| {
                ConfigError::new(ConfigErrorKind::InvalidPort {
                    variable: PORT_VAR,
                    value: port.clone(),
                })
            })?;
            config.base_url = format!("http://127.0.0.1:{parsed}");
        }

        if let Ok(token) = std::env::var(TOKEN_VAR) {
            if !token.is_empty() {
                config.api_token = Some(token);
            }
        }

        Ok(config)
    }

    /// Replaces the sidecar base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the API token sent with every request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Replaces the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sidecar base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API token, if configured.
    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
