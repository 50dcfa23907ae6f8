//! pytoc configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. --config <path>
//! 2. User-level (~/.config/pytoc/config.toml)
//! 3. Default values
//! ```
//!
//! # Example
//!
//! ```toml
//! [codegen]
//! indent = "\t"
//!
//! [repl]
//! prompt = "py> "
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration shared by both front ends
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// C generation settings
    #[serde(default)]
    pub codegen: CodegenConfig,
    /// Interactive mode settings
    #[serde(default)]
    pub repl: ReplConfig,
}

/// C generation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodegenConfig {
    /// Per-level indent string of the generated C
    #[serde(default = "default_indent")]
    pub indent: String,
    /// Name declared when the program assigns no variables, so the
    /// global declaration line is never empty
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_indent() -> String {
    "    ".to_string()
}

fn default_placeholder() -> String {
    "__pytoc_unused".to_string()
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            placeholder: default_placeholder(),
        }
    }
}

/// REPL configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplConfig {
    /// Prompt string
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Line that ends the session
    #[serde(default = "default_quit_command")]
    pub quit_command: String,
    /// History file path
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

fn default_prompt() -> String {
    ">> ".to_string()
}

fn default_quit_command() -> String {
    ":q".to_string()
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            quit_command: default_quit_command(),
            history_file: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("pytoc"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("pytoc"));
    }

    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("pytoc"));
    }

    None
}

/// Get the user config file path (~/.config/pytoc/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Parse configuration text
pub fn parse_config(
    content: &str,
    origin: &Path,
) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read one configuration file
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

/// Load configuration: an explicit path must exist, the user-level file is
/// optional, defaults fill the rest.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match get_config_path() {
        Some(path) if path.exists() => load_config_file(&path),
        _ => Ok(Config::default()),
    }
}
