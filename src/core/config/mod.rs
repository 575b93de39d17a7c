//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! `hb` reads a single user-level TOML file. Every key is optional.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! An explicit `--config <path>` wins. Otherwise, searched in order:
//! 1. `$HB_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/hb/config.toml`
//! 3. `~/.hb/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use hierarchy_builder::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let config = result.config;
//!
//! println!("Style: {}", config.render_style());
//! println!("Overflow: {}", config.overflow_policy());
//! ```

pub mod schema;

pub use schema::{FibConfig, FileConfig, RenderConfig};

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "HB_CONFIG";

/// Keys understood by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &["render.style", "render.show_nominal", "fib.overflow"];

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown config key '{0}'")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// How `build` renders a hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Indented ownership tree
    #[default]
    Tree,
    /// One line, chunks separated by `|`
    Flat,
    /// Machine-readable layout
    Json,
}

impl RenderStyle {
    /// The style's config spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStyle::Tree => "tree",
            RenderStyle::Flat => "flat",
            RenderStyle::Json => "json",
        }
    }
}

impl FromStr for RenderStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(RenderStyle::Tree),
            "flat" => Ok(RenderStyle::Flat),
            "json" => Ok(RenderStyle::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "invalid render style '{}', must be one of: {}",
                other,
                RenderConfig::VALID_STYLES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What `fib` does past the overflow ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Report `ArithmeticOverflow`
    #[default]
    Error,
    /// Clamp to `u64::MAX`
    Saturate,
}

impl OverflowPolicy {
    /// The policy's config spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Error => "error",
            OverflowPolicy::Saturate => "saturate",
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(OverflowPolicy::Error),
            "saturate" => Ok(OverflowPolicy::Saturate),
            other => Err(ConfigError::InvalidValue(format!(
                "invalid overflow policy '{}', must be one of: {}",
                other,
                FibConfig::VALID_POLICIES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loaded configuration.
///
/// Accessor methods apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub file: FileConfig,
    /// Path the config was loaded from (if a file existed)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// If `explicit` is provided, only that file is considered. A missing
    /// explicit file yields defaults and a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// holds invalid values. Missing config files are not an error.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        if let Some(path) = explicit {
            if !path.exists() {
                warnings.push(ConfigWarning {
                    message: "config file not found, using defaults".to_string(),
                    path: path.to_path_buf(),
                });
                return Ok(ConfigLoadResult {
                    config: Config::default(),
                    warnings,
                });
            }
            return Ok(ConfigLoadResult {
                config: Self::load_from(path)?,
                warnings,
            });
        }

        let candidates = search_paths(|key| std::env::var(key).ok(), dirs::home_dir());
        for path in candidates {
            if path.exists() {
                return Ok(ConfigLoadResult {
                    config: Self::load_from(&path)?,
                    warnings,
                });
            }
        }

        // No config found, use defaults
        Ok(ConfigLoadResult {
            config: Config::default(),
            warnings,
        })
    }

    /// Read, parse and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Config {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Get the canonical config path.
    ///
    /// Returns `~/.hb/config.toml`.
    pub fn canonical_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".hb/config.toml"))
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write a config file atomically.
    ///
    /// Creates parent directories if needed. Writes to a temp file in the
    /// same directory, then renames over the target.
    pub fn write(path: &Path, file: &FileConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(file).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut out = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        out.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        out.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the render style.
    ///
    /// Defaults to `tree` if not configured.
    pub fn render_style(&self) -> RenderStyle {
        self.file
            .render
            .as_ref()
            .and_then(|r| r.style.as_deref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Check if levels are annotated with their nominal length.
    ///
    /// Defaults to `true` if not configured.
    pub fn show_nominal(&self) -> bool {
        self.file
            .render
            .as_ref()
            .and_then(|r| r.show_nominal)
            .unwrap_or(true)
    }

    /// Get the overflow policy.
    ///
    /// Defaults to `error` if not configured.
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.file
            .fib
            .as_ref()
            .and_then(|f| f.overflow.as_deref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the effective value of a key, with defaults applied.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "render.style" => Ok(self.render_style().to_string()),
            "render.show_nominal" => Ok(self.show_nominal().to_string()),
            "fib.overflow" => Ok(self.overflow_policy().to_string()),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }

    /// Set a key in the file contents after validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "render.style" => {
                let style: RenderStyle = value.parse()?;
                self.file.render.get_or_insert_with(Default::default).style =
                    Some(style.to_string());
            }
            "render.show_nominal" => {
                let show: bool = value.parse().map_err(|_| {
                    ConfigError::InvalidValue(format!(
                        "invalid boolean '{}' for render.show_nominal",
                        value
                    ))
                })?;
                self.file.render.get_or_insert_with(Default::default).show_nominal = Some(show);
            }
            "fib.overflow" => {
                let policy: OverflowPolicy = value.parse()?;
                self.file.fib.get_or_insert_with(Default::default).overflow =
                    Some(policy.to_string());
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

/// Candidate config paths in search order.
///
/// `env` looks up environment variables; `home` is the user's home directory.
pub fn search_paths(env: impl Fn(&str) -> Option<String>, home: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = env(CONFIG_ENV) {
        paths.push(PathBuf::from(path));
    }
    if let Some(xdg_home) = env("XDG_CONFIG_HOME") {
        paths.push(PathBuf::from(xdg_home).join("hb/config.toml"));
    }
    if let Some(home) = home {
        paths.push(home.join(".hb/config.toml"));
    }

    paths
}
