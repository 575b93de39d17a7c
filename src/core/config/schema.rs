//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$HB_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/hb/config.toml`
//! 3. `~/.hb/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they name a known
//! render style or overflow policy.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Configuration file contents.
///
/// # Example
///
/// ```toml
/// [render]
/// style = "tree"
/// show_nominal = true
///
/// [fib]
/// overflow = "error"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Rendering defaults for `build`
    pub render: Option<RenderConfig>,

    /// Fibonacci index defaults
    pub fib: Option<FibConfig>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(render) = &self.render {
            render.validate()?;
        }
        if let Some(fib) = &self.fib {
            fib.validate()?;
        }
        Ok(())
    }
}

/// Render defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output style ("tree", "flat" or "json")
    pub style: Option<String>,

    /// Annotate levels with their nominal Fibonacci length
    pub show_nominal: Option<bool>,
}

impl RenderConfig {
    /// Valid render styles.
    pub const VALID_STYLES: &'static [&'static str] = &["tree", "flat", "json"];

    /// Validate the render configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(style) = &self.style {
            if !Self::VALID_STYLES.contains(&style.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid render style '{}', must be one of: {}",
                    style,
                    Self::VALID_STYLES.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Fibonacci index defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FibConfig {
    /// What `fib` does past the overflow ceiling ("error" or "saturate")
    pub overflow: Option<String>,
}

impl FibConfig {
    /// Valid overflow policies.
    pub const VALID_POLICIES: &'static [&'static str] = &["error", "saturate"];

    /// Validate the fib configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(policy) = &self.overflow {
            if !Self::VALID_POLICIES.contains(&policy.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid overflow policy '{}', must be one of: {}",
                    policy,
                    Self::VALID_POLICIES.join(", ")
                )));
            }
        }
        Ok(())
    }
}
