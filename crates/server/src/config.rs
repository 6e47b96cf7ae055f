use anyhow::{Context, Result};
use gcls_classroom::{ClientConfig, OauthConfig};
use gcls_mcp::Dispatcher;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub classroom: ClassroomConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomConfig {
    /// Classroom API endpoint; overridable for staging/tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    gcls_classroom::config::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClassroomConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .context("Failed to read configuration file")?;
            toml::from_str(&content).context("Failed to parse configuration file")
        } else {
            tracing::info!("Configuration file not found, using defaults");
            Ok(Self {
                classroom: Default::default(),
            })
        }
    }
}

/// Application state shared across handlers.
///
/// Everything in here is read-only for the lifetime of the process; the
/// per-request Classroom client is constructed inside the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub oauth: Arc<OauthConfig>,
}

impl AppState {
    pub fn new(config: &ServerConfig, oauth: OauthConfig) -> Result<Self> {
        let base_url = Url::parse(&config.classroom.base_url)
            .context("Invalid classroom base URL in configuration")?;

        let client_config = ClientConfig {
            base_url,
            access_token: oauth.access_token.clone(),
            timeout: Duration::from_secs(config.classroom.timeout_secs),
        };

        Ok(Self {
            dispatcher: Dispatcher::new(client_config),
            oauth: Arc::new(oauth),
        })
    }
}
