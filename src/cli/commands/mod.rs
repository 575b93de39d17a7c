//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves configuration and command-specific arguments
//! 2. Calls into `core` to compute the result
//! 3. Formats and displays output through `ui`
//!
//! Primary results go to stdout even in quiet mode; quiet only silences
//! status messages and warnings.

mod build;
mod completion;
mod config_cmd;
mod fib;
mod partition;

// Re-export command functions for testing and direct invocation
pub use build::build;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use fib::fib;
pub use partition::partition;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::types::{Slot, SlotKind};
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Fib {
            index,
            upto,
            saturate,
        } => fib::fib(ctx, index, upto, saturate),
        Command::Partition { slots, start_depth } => {
            partition::partition(ctx, slots_or_demo(slots), start_depth)
        }
        Command::Build {
            slots,
            start_depth,
            style,
            fingerprint,
            no_nominal,
        } => build::build(
            ctx,
            slots_or_demo(slots),
            start_depth,
            style,
            fingerprint,
            no_nominal,
        ),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// The slots given on the command line, or `int char bool long` if none were.
fn slots_or_demo(slots: Vec<Slot>) -> Vec<Slot> {
    if slots.is_empty() {
        SlotKind::ALL.into_iter().map(Slot::of_kind).collect()
    } else {
        slots
    }
}
