//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.
//! Loading never fails; [`Config::validate`] reports what is unusable.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::actions::ActionCatalog;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Correlation UUID sent as `_bin` when `BIN_UUID` is unset.
pub const DEFAULT_BIN_UUID: &str = "6874794c-513e-456f-801f-5957a82e068e";

/// Provider host; `{provider}` is replaced by the action's provider.
pub const DEFAULT_HOST_TEMPLATE: &str = "https://{provider}.dial.to";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Blink API access.
    pub blink: BlinkConfig,

    /// Which actions this deployment exposes.
    pub actions: ActionsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the Blink API.
#[derive(Clone, Serialize, Deserialize)]
pub struct BlinkConfig {
    /// Value of the `X-Blink-Client-Key` header. Required to build requests.
    pub client_key: Option<String>,

    /// Correlation UUID sent as the `_bin` query parameter.
    pub bin_uuid: String,

    /// Provider host template, e.g. `https://{provider}.dial.to`.
    pub host_template: String,

    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for BlinkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlinkConfig")
            .field("client_key", &self.client_key.as_ref().map(|_| "[REDACTED]"))
            .field("bin_uuid", &self.bin_uuid)
            .field("host_template", &self.host_template)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl BlinkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            client_key: None,
            bin_uuid: DEFAULT_BIN_UUID.to_string(),
            host_template: DEFAULT_HOST_TEMPLATE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Action selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionsConfig {
    /// Tool names to expose. Empty means every built-in action.
    pub enabled: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "blink-actions-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            blink: BlinkConfig::default(),
            actions: ActionsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`); Blink settings keep the names the
    /// Blink tooling uses (`BLINK_CLIENT_KEY`, `BIN_UUID`, ...).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(key) = std::env::var("BLINK_CLIENT_KEY") {
            if !key.trim().is_empty() {
                config.blink.client_key = Some(key);
            }
        }

        if let Ok(bin_uuid) = std::env::var("BIN_UUID") {
            config.blink.bin_uuid = bin_uuid;
        }

        if let Ok(template) = std::env::var("BLINK_HOST_TEMPLATE") {
            config.blink.host_template = template;
        }

        if let Ok(timeout) = std::env::var("BLINK_TIMEOUT_SECS") {
            // Zero is rejected by validate(), so a bad value is not silently replaced.
            config.blink.timeout_secs = timeout.trim().parse().unwrap_or(0);
        }

        if let Ok(actions) = std::env::var("BLINK_ACTIONS") {
            config.actions.enabled = actions
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }

        config
    }

    /// Log what was loaded. Call once logging is initialized.
    pub fn log_summary(&self) {
        match self.blink.client_key.as_deref() {
            Some(key) if !key.trim().is_empty() => info!("Blink client key loaded"),
            _ => warn!("BLINK_CLIENT_KEY not set - action tools cannot build requests"),
        }

        if self.blink.timeout_secs == 0 {
            warn!("BLINK_TIMEOUT_SECS must be a positive integer");
        } else {
            info!("Blink call timeout: {}s", self.blink.timeout_secs);
        }

        if !self.actions.enabled.is_empty() {
            info!("Restricting actions to: {}", self.actions.enabled.join(", "));
        }
    }

    /// Check that the configuration can serve requests.
    pub fn validate(&self) -> Result<()> {
        let blink = &self.blink;

        if blink
            .client_key
            .as_deref()
            .is_none_or(|key| key.trim().is_empty())
        {
            return Err(Error::config("BLINK_CLIENT_KEY must be set"));
        }

        uuid::Uuid::parse_str(&blink.bin_uuid).map_err(|e| {
            Error::config(format!("BIN_UUID '{}' is not a UUID: {}", blink.bin_uuid, e))
        })?;

        if !blink.host_template.contains("{provider}") {
            return Err(Error::config(format!(
                "BLINK_HOST_TEMPLATE '{}' must contain {{provider}}",
                blink.host_template
            )));
        }
        let sample = blink.host_template.replace("{provider}", "jupiter");
        let url = reqwest::Url::parse(&sample).map_err(|e| {
            Error::config(format!(
                "BLINK_HOST_TEMPLATE '{}' is not a valid URL: {}",
                blink.host_template, e
            ))
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "BLINK_HOST_TEMPLATE '{}' cannot carry a path",
                blink.host_template
            )));
        }

        if blink.timeout_secs == 0 {
            return Err(Error::config("BLINK_TIMEOUT_SECS must be a positive integer"));
        }

        let known = ActionCatalog::builtin().names();
        if let Some(unknown) = self
            .actions
            .enabled
            .iter()
            .find(|name| !known.contains(&name.as_str()))
        {
            return Err(Error::config(format!(
                "BLINK_ACTIONS names unknown action '{}'",
                unknown
            )));
        }

        Ok(())
    }
}
