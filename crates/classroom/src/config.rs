//! Configuration types for the Classroom client.

use std::time::Duration;
use url::Url;

/// Default Classroom API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://classroom.googleapis.com";

/// Configuration for a Classroom client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Classroom API.
    pub base_url: Url,
    /// OAuth access token presented as a bearer credential.
    pub access_token: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            access_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // DEFAULT_BASE_URL is a valid literal
        Self::new(Url::parse(DEFAULT_BASE_URL).unwrap())
    }
}

/// OAuth application credentials, loaded once at startup and treated as
/// read-only for the lifetime of the process. Passed explicitly wherever a
/// client is constructed; there is no global credential state.
#[derive(Debug, Clone)]
pub struct OauthConfig {
    /// OAuth client ID.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Redirect URI registered for the one-time bootstrap callback.
    pub redirect_uri: String,
    /// Long-lived access token minted by the bootstrap flow. Absent until
    /// the operator has completed it.
    pub access_token: Option<String>,
    /// Refresh token minted by the bootstrap flow. Held for the operator;
    /// the gateway performs no in-process refresh.
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url.as_str(), "https://classroom.googleapis.com/");
        assert!(config.access_token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
