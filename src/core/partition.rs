//! core::partition
//!
//! Splits a sequence into Fibonacci-sized chunks.
//!
//! # Truncation
//!
//! The chunk at depth `d` nominally holds `fib(d)` elements. When fewer
//! remain, the chunk takes all of them and the remainder is empty. The
//! nominal length saturates past the overflow ceiling, so partitioning is
//! total: it never fails and never reads out of bounds.
//!
//! # Example
//!
//! ```
//! use hierarchy_builder::core::partition::{fib_chunks, partition};
//!
//! let seq = ['a', 'b', 'c', 'd'];
//!
//! let p = partition(&seq, 2);
//! assert_eq!(p.chunk, &['a', 'b']);
//! assert_eq!(p.remainder, &['c', 'd']);
//!
//! let chunks: Vec<&[char]> = fib_chunks(&seq).map(|p| p.chunk).collect();
//! assert_eq!(chunks, vec![&['a'][..], &['b'][..], &['c', 'd'][..]]);
//! ```

use super::fib::fib_saturating;

/// One split of a sequence at a given depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition<'a, T> {
    /// Depth the split was taken at.
    pub depth: usize,
    /// Leading elements, at most `nominal_len` of them.
    pub chunk: &'a [T],
    /// Everything after the chunk.
    pub remainder: &'a [T],
    /// `fib(depth)`, saturated at `u64::MAX`.
    pub nominal_len: u64,
}

impl<T> Partition<'_, T> {
    /// True if the sequence ran out before the chunk reached its nominal length.
    pub fn is_truncated(&self) -> bool {
        (self.chunk.len() as u64) < self.nominal_len
    }
}

/// Number of elements the chunk at `depth` takes out of `available`.
pub fn chunk_len(available: usize, depth: usize) -> usize {
    usize::try_from(fib_saturating(depth)).map_or(available, |n| n.min(available))
}

/// Split `sequence` at `depth`.
pub fn partition<T>(sequence: &[T], depth: usize) -> Partition<'_, T> {
    let (chunk, remainder) = sequence.split_at(chunk_len(sequence.len(), depth));
    Partition {
        depth,
        chunk,
        remainder,
        nominal_len: fib_saturating(depth),
    }
}

/// Iterate successive partitions starting at depth 0.
pub fn fib_chunks<T>(sequence: &[T]) -> FibChunks<'_, T> {
    fib_chunks_from(sequence, 0)
}

/// Iterate successive partitions starting at `start_depth`.
pub fn fib_chunks_from<T>(sequence: &[T], start_depth: usize) -> FibChunks<'_, T> {
    FibChunks {
        remaining: sequence,
        depth: start_depth,
    }
}

/// Iterator returned by [`fib_chunks`].
///
/// Each item's `remainder` is the input to the next item. Iteration ends once
/// the sequence is exhausted, so an empty input yields nothing.
#[derive(Debug, Clone)]
pub struct FibChunks<'a, T> {
    remaining: &'a [T],
    depth: usize,
}

impl<'a, T> Iterator for FibChunks<'a, T> {
    type Item = Partition<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let split = partition(self.remaining, self.depth);
        self.remaining = split.remainder;
        self.depth = self.depth.saturating_add(1);
        Some(split)
    }
}

impl<T> std::iter::FusedIterator for FibChunks<'_, T> {}
