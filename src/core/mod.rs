//! core
//!
//! Core domain types and composition.
//!
//! # Modules
//!
//! - [`fib`] - The Fibonacci index and its overflow ceiling
//! - [`types`] - Strong types: Slot, SlotKind, Fingerprint
//! - [`partition`] - Fibonacci-sized chunking of a sequence
//! - [`chain`] - Linear ownership chains of units
//! - [`hierarchy`] - Recursive composition of chains into a hierarchy
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Composition is pure and total; only `fib` can fail, and only past its ceiling
//! - Every hierarchy owns its units exclusively, with no sharing between calls
//! - Traversal is outermost level first, left to right within a level

pub mod chain;
pub mod config;
pub mod fib;
pub mod hierarchy;
pub mod partition;
pub mod types;
