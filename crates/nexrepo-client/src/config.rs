//! Connection configuration
//!
//! Settings are read from `~/.config/nexrepo/config.yaml` (or an explicit
//! path) and overridden by command-line flags and environment variables.
//!
//! ```yaml
//! url: http://localhost:8081/nexus
//! credentials:
//!   type: basic
//!   username: admin
//!   password: admin123
//! timeoutSecs: 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::credentials::{Credentials, ResolvedCredentials};
use crate::error::{ClientError, DEFAULT_TIMEOUT_SECS, Result};

/// Contents of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NexusConfig {
    /// Base URL of the Nexus instance, including any context path
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub credentials: Option<Credentials>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl NexusConfig {
    /// Load configuration from the default location, if present
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClientError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Get default configuration path
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| ClientError::InvalidConfig {
            message: "Could not determine config directory".to_string(),
        })?;
        Ok(config_dir.join("nexrepo").join("config.yaml"))
    }

    /// Apply command-line and environment values on top of the file
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(url) = overrides.url {
            self.url = Some(url);
        }

        match (overrides.username, overrides.password) {
            (Some(username), password) => {
                let password = password
                    .or_else(|| match &self.credentials {
                        Some(Credentials::Basic { password, .. }) => Some(password.clone()),
                        _ => None,
                    })
                    .unwrap_or_default();
                self.credentials = Some(Credentials::basic(username, password));
            }
            (None, Some(password)) => {
                if let Some(Credentials::Basic { username, .. }) = &self.credentials {
                    self.credentials = Some(Credentials::basic(username.clone(), password));
                } else {
                    tracing::warn!("Password given without a username; ignoring it");
                }
            }
            (None, None) => {}
        }

        self
    }

    /// Validate the merged settings into a usable connection
    pub fn connection(&self) -> Result<Connection> {
        let raw_url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ClientError::InvalidConfig {
                message: "Nexus URL is not set (use --url or NEXUS_URL)".to_string(),
            })?;

        let base_url = normalize_base_url(raw_url)?;

        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| ClientError::InvalidConfig {
                message: "Nexus credentials are not set (use --username/--password or NEXUS_USERNAME/NEXUS_PASSWORD)".to_string(),
            })?
            .resolve()?;

        Ok(Connection {
            base_url,
            credentials,
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

/// Validated connection settings
#[derive(Debug, Clone)]
pub struct Connection {
    /// Base URL without a trailing slash
    pub base_url: String,
    pub credentials: ResolvedCredentials,
    pub timeout_secs: u64,
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).map_err(|e| ClientError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ClientError::InvalidUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            });
        }
    }

    Ok(raw.trim_end_matches('/').to_string())
}
