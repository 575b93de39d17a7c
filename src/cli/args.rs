//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file instead of searching
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::RenderStyle;
use crate::core::types::Slot;

/// hb - Compose slot sequences into Fibonacci-sized ownership hierarchies
#[derive(Parser, Debug)]
#[command(name = "hb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of searching the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a Fibonacci index value
    #[command(
        name = "fib",
        long_about = "Print fib(N), where fib(0) = fib(1) = 1.\n\n\
            Values are 64-bit. fib(92) is the largest representable value; larger \
            indices fail with an overflow error unless saturation is requested \
            with --saturate or `fib.overflow = \"saturate\"` in the config file.",
        after_help = "\
EXAMPLES:
    # A single value
    hb fib 4

    # The table from fib(0) through fib(10)
    hb fib 10 --upto

    # Clamp instead of failing past the ceiling
    hb fib 100 --saturate"
    )]
    Fib {
        /// Index to compute
        index: usize,

        /// Print every index from 0 through N
        #[arg(long)]
        upto: bool,

        /// Clamp to the largest u64 instead of failing on overflow
        #[arg(long)]
        saturate: bool,
    },

    /// Show how slots split into Fibonacci-sized chunks
    #[command(
        name = "partition",
        long_about = "Split a sequence of slots into chunks of fib(0), fib(1), ... \
            elements and print each chunk with its depth.\n\n\
            A slot is `kind` or `kind=literal`, where kind is one of int, char, \
            bool, long. With no slots, the list `int char bool long` is used. \
            The final chunk is truncated if the sequence runs out.",
        after_help = "\
EXAMPLES:
    hb partition int char bool long
    hb partition int=1 int=2 int=3 int=4 int=5 --start-depth 2"
    )]
    Partition {
        /// Slots to partition
        #[arg(value_name = "SLOT")]
        slots: Vec<Slot>,

        /// Depth of the first chunk
        #[arg(long, default_value_t = 0)]
        start_depth: usize,
    },

    /// Compose slots into a hierarchy and render it
    #[command(
        name = "build",
        long_about = "Compose a sequence of slots into a hierarchy.\n\n\
            Each level is a linear chain of units built from one Fibonacci-sized \
            chunk; each level owns the level below it. With no slots, the list \
            `int char bool long` is used.",
        after_help = "\
EXAMPLES:
    # Ownership tree (default)
    hb build int char bool long

    # One line, chunks separated by |
    hb build int char bool long --style flat

    # Machine-readable layout with a content fingerprint
    hb build int=7 bool=true --style json --fingerprint"
    )]
    Build {
        /// Slots to compose
        #[arg(value_name = "SLOT")]
        slots: Vec<Slot>,

        /// Depth of the first level
        #[arg(long, default_value_t = 0)]
        start_depth: usize,

        /// Output style: tree, flat or json (overrides config)
        #[arg(long)]
        style: Option<RenderStyle>,

        /// Also print the hierarchy's content fingerprint
        #[arg(long)]
        fingerprint: bool,

        /// Omit the "[len of fib(depth)]" annotation in tree style
        #[arg(long)]
        no_nominal: bool,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        after_help = "\
KEYS:
    render.style          tree | flat | json
    render.show_nominal   true | false
    fib.overflow          error | saturate"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    hb completion bash > ~/.local/share/bash-completion/completions/hb
    hb completion zsh > ~/.zfunc/_hb"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
