//! TOML configuration for the generator.
//!
//! Read from `termkeys.toml` in the working directory unless `--config` (or
//! `TERMKEYS_CONFIG`) names another file.  A missing file is not an error; the
//! defaults below apply.
//!
//! ```toml
//! [output]
//! prefix = "src/keycode"
//! format = "rust"        # rust | c | json
//!
//! [style]
//! comment_width = 30
//!
//! [logging]
//! log_level = "info"
//! ```
//!
//! Every field has a `#[serde(default = "...")]` so a partial file only
//! overrides what it names.  Command-line flags override the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use termkeys_core::emit::{EmitFormat, DEFAULT_COMMENT_WIDTH};
use thiserror::Error;

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "termkeys.toml";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and in which language the table is written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output path without extension; `src/keycode` writes `src/keycode.rs`.
    #[serde(default = "default_prefix")]
    pub prefix: PathBuf,
    #[serde(default)]
    pub format: EmitFormat,
}

/// Layout of the generated source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleConfig {
    /// Column at which description comments start.
    #[serde(default = "default_comment_width")]
    pub comment_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_prefix() -> PathBuf {
    PathBuf::from("src/keycode")
}
fn default_comment_width() -> usize {
    DEFAULT_COMMENT_WIDTH
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            format: EmitFormat::default(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            comment_width: default_comment_width(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Loads `GenConfig` from `path`, returning `GenConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<GenConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: GenConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(GenConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
