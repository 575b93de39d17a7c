//! core::fib
//!
//! The Fibonacci index that sizes hierarchy levels.
//!
//! # Definition
//!
//! `fib(0) = fib(1) = 1` and `fib(n) = fib(n - 1) + fib(n - 2)` for `n >= 2`,
//! so the sequence runs 1, 1, 2, 3, 5, 8, ...
//!
//! # Overflow Ceiling
//!
//! Values are `u64`. The largest representable index is [`MAX_FIB_INDEX`]
//! (`fib(92) = 12200160415121876738`). Asking for any larger index is an
//! [`FibError::ArithmeticOverflow`]; the value is never wrapped.
//! [`fib_saturating`] is available for callers that prefer clamping.
//!
//! The table is computed at compile time.

use thiserror::Error;

/// Largest index whose value fits in a `u64`.
pub const MAX_FIB_INDEX: usize = 92;

/// Every representable value, indexed by `n`.
pub const FIB_TABLE: [u64; MAX_FIB_INDEX + 1] = build_table();

const fn build_table() -> [u64; MAX_FIB_INDEX + 1] {
    let mut table = [1u64; MAX_FIB_INDEX + 1];
    let mut n = 2;
    while n <= MAX_FIB_INDEX {
        table[n] = table[n - 1] + table[n - 2];
        n += 1;
    }
    table
}

/// Errors from the Fibonacci index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FibError {
    #[error("fib({index}) overflows u64 (largest representable index is {max})", max = MAX_FIB_INDEX)]
    ArithmeticOverflow { index: usize },
}

/// Compute `fib(n)`.
///
/// # Errors
///
/// Returns `FibError::ArithmeticOverflow` when `n > MAX_FIB_INDEX`.
///
/// # Example
///
/// ```
/// use hierarchy_builder::core::fib::{fib, FibError, MAX_FIB_INDEX};
///
/// assert_eq!(fib(0), Ok(1));
/// assert_eq!(fib(4), Ok(5));
/// assert!(matches!(
///     fib(MAX_FIB_INDEX + 1),
///     Err(FibError::ArithmeticOverflow { .. })
/// ));
/// ```
pub fn fib(n: usize) -> Result<u64, FibError> {
    FIB_TABLE
        .get(n)
        .copied()
        .ok_or(FibError::ArithmeticOverflow { index: n })
}

/// Compute `fib(n)`, clamping to `u64::MAX` past the ceiling.
pub fn fib_saturating(n: usize) -> u64 {
    fib(n).unwrap_or(u64::MAX)
}

/// Iterator over `(index, fib(index))` for every representable index.
#[derive(Debug, Clone, Default)]
pub struct FibSequence {
    next: usize,
}

impl FibSequence {
    /// Start at index 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `index`. Yields nothing if `index` is past the ceiling.
    pub fn starting_at(index: usize) -> Self {
        Self { next: index }
    }
}

impl Iterator for FibSequence {
    type Item = (usize, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let value = FIB_TABLE.get(self.next).copied()?;
        let index = self.next;
        self.next += 1;
        Some((index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = FIB_TABLE.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FibSequence {}
