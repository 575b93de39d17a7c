//! hierarchy-builder - Fibonacci-sized ownership hierarchies
//!
//! Composes an ordered sequence of slots into a nested hierarchy. The
//! sequence is split into consecutive chunks of `fib(0), fib(1), fib(2), ...`
//! elements (1, 1, 2, 3, 5, ...); each chunk becomes a linear chain of
//! units, and each level owns the level composed from the rest.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, the Fibonacci index, partitioning and composition
//! - [`ui`] - Output verbosity and hierarchy rendering
//! - [`cli`] - Command-line interface (`hb`)
//!
//! # Example
//!
//! ```
//! use hierarchy_builder::core::hierarchy::compose;
//!
//! let h = compose(vec!["int", "char", "bool", "long"]);
//! assert_eq!(h.level_count(), 3);
//! assert_eq!(h.values().copied().collect::<Vec<_>>(), ["int", "char", "bool", "long"]);
//! ```

pub mod cli;
pub mod core;
pub mod ui;
