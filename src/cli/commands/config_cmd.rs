//! config command - Get, set, or list configuration values

use crate::cli::Context;
use crate::core::config::{Config, KEYS};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Print the effective value of a configuration key.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = ctx.load_config()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value and write the config file.
///
/// Writes to `--config` if given, otherwise to the file that was loaded,
/// otherwise to the canonical location.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = ctx.load_config()?;
    config.set(key, value)?;

    let path = match (&ctx.config_path, config.loaded_from()) {
        (Some(explicit), _) => explicit.clone(),
        (None, Some(loaded)) => loaded.to_path_buf(),
        (None, None) => Config::canonical_path()?,
    };
    output::debug(format!("Writing config to {}", path.display()), ctx.verbosity());

    Config::write(&path, &config.file)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    output::success(format!("Set {} = {}", key, value), ctx.verbosity());
    Ok(())
}

/// List every configuration key with its effective value.
pub fn list(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;

    match config.loaded_from() {
        Some(path) => println!("# Configuration ({})", path.display()),
        None => println!("# Configuration (defaults)"),
    }
    for key in KEYS {
        println!("{} = {}", key, config.get(key)?);
    }

    Ok(())
}
