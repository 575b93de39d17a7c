//! fib command - Print Fibonacci index values

use crate::cli::Context;
use crate::core::config::OverflowPolicy;
use crate::core::fib::{self as fibonacci, FibError, MAX_FIB_INDEX};
use crate::ui::output;
use anyhow::Result;

/// Print `fib(index)`, or the table `0..=index` with `upto`.
///
/// `saturate` overrides the configured overflow policy.
pub fn fib(ctx: &Context, index: usize, upto: bool, saturate: bool) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = ctx.load_config()?;
    let policy = if saturate {
        OverflowPolicy::Saturate
    } else {
        config.overflow_policy()
    };
    output::debug(
        format!("fib index={} upto={} overflow={}", index, upto, policy),
        verbosity,
    );

    // Fail before printing any of the table.
    let value = resolve(index, policy)?;

    if upto {
        for row in table_rows(index, policy)? {
            println!("{}", row);
        }
    } else {
        println!("{}", value);
    }

    Ok(())
}

/// Rows of the `--upto` table for `0..=index`.
///
/// Every index past the ceiling saturates to the same value, so that tail is
/// collapsed into one `first..=last` row.
fn table_rows(index: usize, policy: OverflowPolicy) -> Result<Vec<String>, FibError> {
    let last_exact = index.min(MAX_FIB_INDEX);
    let mut rows = Vec::with_capacity(last_exact + 2);
    for n in 0..=last_exact {
        rows.push(format!("{}\t{}", n, resolve(n, policy)?));
    }

    if index > MAX_FIB_INDEX {
        let value = resolve(index, policy)?;
        let first = MAX_FIB_INDEX + 1;
        if index == first {
            rows.push(format!("{}\t{}", index, value));
        } else {
            rows.push(format!("{}..={}\t{}", first, index, value));
        }
    }

    Ok(rows)
}

fn resolve(index: usize, policy: OverflowPolicy) -> Result<u64, FibError> {
    match policy {
        OverflowPolicy::Error => fibonacci::fib(index),
        OverflowPolicy::Saturate => Ok(fibonacci::fib_saturating(index)),
    }
}
