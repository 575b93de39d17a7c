//! partition command - Show Fibonacci-sized chunk boundaries

use crate::cli::Context;
use crate::core::partition::fib_chunks_from;
use crate::core::types::Slot;
use crate::ui::output;
use anyhow::Result;

/// Print each chunk of `slots`, starting at `start_depth`.
pub fn partition(ctx: &Context, slots: Vec<Slot>, start_depth: usize) -> Result<()> {
    let verbosity = ctx.verbosity();
    output::debug(
        format!(
            "Partitioning {} slot(s) from depth {}",
            slots.len(),
            start_depth
        ),
        verbosity,
    );

    for split in fib_chunks_from(&slots, start_depth) {
        println!(
            "depth {}: [{} of {}] {}",
            split.depth,
            split.chunk.len(),
            split.nominal_len,
            output::format_list(split.chunk, " ")
        );
        if split.is_truncated() {
            output::debug(
                format!("Chunk at depth {} truncated by end of input", split.depth),
                verbosity,
            );
        }
    }

    Ok(())
}
