//! sorted-linked-list - A sorted singly-linked list over integers or text
//!
//! The list keeps its elements in non-decreasing order under a comparator
//! chosen at construction, and holds values of one kind only: the first
//! insert fixes whether the list holds integers or strings.
//!
//! # Architecture
//!
//! - [`core`] - Value types, nodes, comparators, the list, and configuration
//! - [`ui`] - Diagnostic output and display formatting
//!
//! # Correctness Invariants
//!
//! 1. Elements are always sorted under the list's comparator
//! 2. All elements share one kind; a rejected insert changes nothing
//! 3. The element count always matches the chain length
//!
//! # Example
//!
//! ```
//! use sorted_linked_list::SortedList;
//!
//! let mut list = SortedList::new();
//! list.try_extend(["banana", "apple", "cherry"]).unwrap();
//! assert_eq!(list.to_string(), "[apple, banana, cherry]");
//! assert_eq!(list.first().and_then(|v| v.as_str()), Some("apple"));
//! ```

pub mod core;
pub mod ui;

pub use crate::core::compare::{Comparator, Natural};
pub use crate::core::list::SortedList;
pub use crate::core::types::{TypeError, Value, ValueKind};
