//! core::hierarchy
//!
//! Fibonacci-sized hierarchy composition.
//!
//! # Architecture
//!
//! A hierarchy is either [`Hierarchy::Terminal`] or a [`Composite`] that
//! exclusively owns two siblings:
//! - `head_chain`: the linear chain built from the chunk at this depth
//! - `tail`: the hierarchy composed from the rest of the sequence at `depth + 1`
//!
//! # Invariants
//!
//! - Chunk sizes follow `fib(depth)`; only the deepest chunk may be short
//! - Every composite's head chain is non-empty
//! - Depth strictly increases along `tail`, so composition terminates after
//!   `O(log_phi(len))` levels
//! - Ownership is a strict tree: nothing is shared between hierarchies
//!
//! # Example
//!
//! ```
//! use hierarchy_builder::core::hierarchy::compose;
//!
//! let h = compose(vec!['a', 'b', 'c', 'd']);
//! let chunks: Vec<Vec<char>> = h
//!     .levels()
//!     .map(|level| level.head_chain().iter().copied().collect())
//!     .collect();
//! assert_eq!(chunks, vec![vec!['a'], vec!['b'], vec!['c', 'd']]);
//! assert_eq!(h.values().collect::<String>(), "abcd");
//! ```

use serde::Serialize;
use std::fmt::Display;

use super::chain::{build_chain, Chain};
use super::fib::fib_saturating;
use super::partition::chunk_len;
use super::types::Fingerprint;

/// A composed hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hierarchy<T> {
    /// One level: a chain plus everything deeper.
    Composite(Box<Composite<T>>),
    /// Empty composition. Owns nothing.
    Terminal,
}

/// A hierarchy level owning its chain and the deeper hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite<T> {
    depth: usize,
    head_chain: Chain<T>,
    tail: Hierarchy<T>,
}

impl<T> Composite<T> {
    /// Depth this level was composed at.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The chain built from this level's chunk.
    pub fn head_chain(&self) -> &Chain<T> {
        &self.head_chain
    }

    /// The hierarchy composed from the rest of the sequence.
    pub fn tail(&self) -> &Hierarchy<T> {
        &self.tail
    }

    /// `fib(depth)`, the length this level's chunk was allowed to reach.
    pub fn nominal_len(&self) -> u64 {
        fib_saturating(self.depth)
    }

    /// True if the sequence ran out before the chunk reached `nominal_len`.
    pub fn is_truncated(&self) -> bool {
        (self.head_chain.len() as u64) < self.nominal_len()
    }
}

/// Compose `sequence` starting at depth 0.
pub fn compose<T, I>(sequence: I) -> Hierarchy<T>
where
    I: IntoIterator<Item = T>,
{
    compose_from(sequence, 0)
}

/// Compose `sequence` starting at `depth`.
///
/// The first chunk takes `fib(depth)` elements.
pub fn compose_from<T, I>(sequence: I, depth: usize) -> Hierarchy<T>
where
    I: IntoIterator<Item = T>,
{
    let mut remaining = sequence.into_iter().collect::<Vec<_>>().into_iter();
    compose_level(&mut remaining, depth)
}

fn compose_level<T>(remaining: &mut std::vec::IntoIter<T>, depth: usize) -> Hierarchy<T> {
    if remaining.len() == 0 {
        return Hierarchy::Terminal;
    }

    let take = chunk_len(remaining.len(), depth);
    let chunk: Vec<T> = remaining.by_ref().take(take).collect();
    let head_chain = build_chain(chunk);
    let tail = compose_level(remaining, depth.saturating_add(1));

    Hierarchy::Composite(Box::new(Composite {
        depth,
        head_chain,
        tail,
    }))
}

impl<T> Hierarchy<T> {
    /// True if the hierarchy owns no units.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Hierarchy::Terminal)
    }

    /// The outermost level, if any.
    pub fn composite(&self) -> Option<&Composite<T>> {
        match self {
            Hierarchy::Composite(composite) => Some(&**composite),
            Hierarchy::Terminal => None,
        }
    }

    /// Iterate levels outermost first.
    pub fn levels(&self) -> Levels<'_, T> {
        Levels { current: self }
    }

    /// Iterate values left to right, chunk by chunk, outermost first.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.levels().flat_map(|level| level.head_chain.iter())
    }

    /// Consume the hierarchy, yielding its values in traversal order.
    pub fn into_values(self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.unit_count());
        let mut current = self;
        while let Hierarchy::Composite(composite) = current {
            let Composite {
                head_chain, tail, ..
            } = *composite;
            values.extend(head_chain);
            current = tail;
        }
        values
    }

    /// Total number of units across all levels.
    pub fn unit_count(&self) -> usize {
        self.levels().map(|level| level.head_chain.len()).sum()
    }

    /// Number of levels (chunks).
    pub fn level_count(&self) -> usize {
        self.levels().count()
    }

    /// A flat, serializable snapshot of the hierarchy.
    pub fn layout(&self) -> Layout<'_, T> {
        Layout {
            levels: self
                .levels()
                .map(|level| LevelLayout {
                    depth: level.depth,
                    nominal_len: level.nominal_len(),
                    len: level.head_chain.len(),
                    values: level.head_chain.iter().collect(),
                })
                .collect(),
        }
    }

    /// A content hash over every `(depth, value)` pair in traversal order.
    pub fn fingerprint(&self) -> Fingerprint
    where
        T: Display,
    {
        Fingerprint::compute(self.levels().flat_map(|level| {
            level
                .head_chain
                .iter()
                .map(move |value| (level.depth, value.to_string()))
        }))
    }
}

impl<T> Default for Hierarchy<T> {
    fn default() -> Self {
        Hierarchy::Terminal
    }
}

impl<T> FromIterator<T> for Hierarchy<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        compose(iter)
    }
}

/// Iterator over the levels of a hierarchy.
pub struct Levels<'a, T> {
    current: &'a Hierarchy<T>,
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = &'a Composite<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let composite = self.current.composite()?;
        self.current = &composite.tail;
        Some(composite)
    }
}

/// Flat snapshot of a hierarchy, outermost level first.
#[derive(Debug, Serialize)]
pub struct Layout<'a, T> {
    pub levels: Vec<LevelLayout<'a, T>>,
}

/// One level of a [`Layout`].
#[derive(Debug, Serialize)]
pub struct LevelLayout<'a, T> {
    pub depth: usize,
    pub nominal_len: u64,
    pub len: usize,
    pub values: Vec<&'a T>,
}
