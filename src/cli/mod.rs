//! cli
//!
//! Command-line interface layer for hb.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration (defaults, config file, flags)
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and calls into
//! [`crate::core`] for composition and [`crate::ui`] for rendering.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};

/// Per-invocation settings derived from global flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit config file, if `--config` was given
    pub config_path: Option<PathBuf>,
    /// Enable debug logging
    pub debug: bool,
    /// Minimal output
    pub quiet: bool,
}

impl Context {
    /// Output verbosity for this invocation.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Load configuration, reporting warnings and the source used.
    pub fn load_config(&self) -> Result<Config> {
        let verbosity = self.verbosity();
        let result =
            Config::load(self.config_path.as_deref()).context("Failed to load config")?;

        for warning in &result.warnings {
            output::warn(
                format!("{} ({})", warning.message, warning.path.display()),
                verbosity,
            );
        }

        match result.config.loaded_from() {
            Some(path) => output::debug(format!("Loaded config from {}", path.display()), verbosity),
            None => output::debug("No config file found, using defaults", verbosity),
        }

        Ok(result.config)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        config_path: cli.config.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
