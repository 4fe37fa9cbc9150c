//! Node configuration with TOML file support.

use serde::{Deserialize, Serialize};

use crate::NodeError;

/// Configuration for a stakecast node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Port the HTTP surface listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Peer addresses to broadcast new blocks to. Each entry is either
    /// `host:port` or a bare port (meaning a peer on the local host).
    #[serde(default)]
    pub peers: Vec<String>,

    /// Validator identity used when no one has staked yet. Defaults to
    /// `Validator-{port}` when unset.
    #[serde(default)]
    pub validator: Option<String>,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_port() -> u16 {
    3000
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, NodeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NodeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, NodeError> {
        toml::from_str(s).map_err(|e| NodeError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("NodeConfig is always serializable to TOML")
    }

    /// The identity blocks are attributed to when the staking pool is empty.
    pub fn fallback_validator(&self) -> String {
        self.validator
            .clone()
            .unwrap_or_else(|| format!("Validator-{}", self.port))
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            peers: Vec::new(),
            validator: None,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
