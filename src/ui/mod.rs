//! ui
//!
//! Output utilities.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-gated diagnostics and sequence formatting

pub mod output;
