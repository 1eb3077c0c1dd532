//! CLI definition for the course library server.

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for courselib
#[derive(Parser, Debug)]
#[command(name = "courselib")]
#[command(author, version, about = "Course library - a small REST API for authors and courses")]
#[command(long_about = r#"
Courselib serves a JSON API for managing authors and the courses they own.

Configuration files are loaded from (in priority order):
1. --config <path>      Explicit config file
2. ./courselib.toml     Project-level config (also .courselib.toml)
3. ~/.config/courselib/config.toml   Global config

Example:
  courselib
  courselib --port 8080 -vv
  courselib --config deploy/courselib.toml --no-seed
"#)]
pub struct Cli {
    /// Host to bind instead of the configured one
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind instead of the configured one
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Start with an empty repository even if seeding is configured
    #[arg(long)]
    pub no_seed: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
