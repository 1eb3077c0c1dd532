//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section and field is optional
//! and falls back to its default.

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Sample data loaded at startup
    pub seed: FileSeedConfig,
    /// Logging defaults
    pub log: FileLogConfig,
}

/// `[server]` section: the socket the HTTP API binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl FileServerConfig {
    /// Address string suitable for a TCP bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// `[seed]` section: whether to load the sample authors and courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSeedConfig {
    pub enabled: bool,
}

impl Default for FileSeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// `[log]` section: default level filter when `RUST_LOG` is unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    pub level: String,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
