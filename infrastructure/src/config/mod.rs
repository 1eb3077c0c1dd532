//! Configuration file loading for courselib
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./courselib.toml` or `./.courselib.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/courselib/config.toml`
//! 4. Fallback: `~/.config/courselib/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileLogConfig, FileSeedConfig, FileServerConfig};
pub use loader::ConfigLoader;
