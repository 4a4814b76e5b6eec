//! core
//!
//! Core types and operations for sorted lists.
//!
//! # Modules
//!
//! - [`types`] - Values, value kinds, and kind errors
//! - [`node`] - A single owning chain cell
//! - [`compare`] - Ordering strategies
//! - [`list`] - The sorted list and its iterators
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Values are a closed sum type, so invalid kinds cannot be stored
//! - Each node exclusively owns its successor
//! - Ordering is injected once and never changes for a list

pub mod compare;
pub mod config;
pub mod list;
pub mod node;
pub mod types;
