//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing and diagnostics
//! - [`render`] - Text rendering of composed hierarchies
//!
//! # Design
//!
//! All output goes through this module so quiet and debug modes are
//! honoured consistently. Rendering functions return strings and never
//! print, which keeps them testable.

pub mod output;
pub mod render;
