//! core::list
//!
//! The sorted singly-linked list.
//!
//! # Invariants
//!
//! - Values are in non-decreasing order under the list's comparator
//! - Every value has the same [`ValueKind`], fixed by the first insert
//!   after construction or [`SortedList::clear`]
//! - `len` equals the number of nodes reachable from `head`
//! - An empty list has no head and no fixed kind
//!
//! # Concurrency
//!
//! A list is a plain owned value with no internal locking. Share it across
//! threads behind a `Mutex` (or similar) if needed. Iterators borrow the
//! list, so it cannot be mutated while an iteration is in progress.

mod iter;

pub use iter::{IntoIter, Iter};

use std::cmp::Ordering;
use std::fmt;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

use super::compare::{Comparator, ConfiguredOrder, Natural};
use super::config::ListConfig;
use super::node::{Link, Node};
use super::types::{TypeError, Value, ValueKind};
use crate::ui::output::{self, format_sequence, Verbosity};

/// A singly-linked list kept in sorted order.
///
/// The comparator `C` is fixed for the lifetime of the list and drives
/// every ordering decision made by [`insert`](Self::insert),
/// [`delete`](Self::delete) and [`search`](Self::search).
///
/// # Example
///
/// ```
/// use sorted_linked_list::core::list::SortedList;
///
/// let mut list = SortedList::new();
/// for n in [5, 2, 8, 1, 9] {
///     list.insert(n).unwrap();
/// }
/// assert_eq!(list.to_string(), "[1, 2, 5, 8, 9]");
///
/// // The first insert fixed the kind
/// assert!(list.insert("ten").is_err());
///
/// assert!(list.delete(5));
/// assert!(!list.search(5));
/// assert_eq!(list.len(), 4);
/// ```
pub struct SortedList<C = Natural> {
    head: Link,
    len: usize,
    kind: Option<ValueKind>,
    comparator: C,
    verbosity: Verbosity,
}

impl SortedList<Natural> {
    /// Create an empty list with the natural ordering.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl SortedList<ConfiguredOrder> {
    /// Create an empty list with the ordering and verbosity from `config`.
    pub fn from_config(config: &ListConfig) -> Self {
        Self::with_comparator(config.comparator()).with_verbosity(config.verbosity())
    }
}

impl<C: Comparator> SortedList<C> {
    /// Create an empty list ordered by `comparator`.
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_linked_list::core::list::SortedList;
    /// use sorted_linked_list::core::types::Value;
    ///
    /// let mut list = SortedList::with_comparator(|a: &Value, b: &Value| b.cmp(a));
    /// for n in [1, 5, 3] {
    ///     list.insert(n).unwrap();
    /// }
    /// assert_eq!(list.to_string(), "[5, 3, 1]");
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            head: None,
            len: 0,
            kind: None,
            comparator,
            verbosity: Verbosity::default(),
        }
    }

    /// Set the diagnostic verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Insert a value at its sorted position.
    ///
    /// The value goes before the first element that strictly follows it, so
    /// equal values keep insertion order.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::TypeMismatch` if the list already holds values of
    /// another kind. The list is unchanged in that case.
    pub fn insert(&mut self, value: impl Into<Value>) -> Result<(), TypeError> {
        let value = value.into();
        self.admit(value.kind())?;

        let comparator = &self.comparator;
        let slot = seek(&mut self.head, |existing| {
            comparator.compare(existing, &value) != Ordering::Greater
        });

        let mut node = Box::new(Node::new(value));
        node.set_next(slot.take());
        *slot = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Check a value's kind against the list, fixing it if unset.
    fn admit(&mut self, found: ValueKind) -> Result<(), TypeError> {
        match self.kind {
            Some(expected) if expected != found => {
                output::debug(
                    format!("rejected {} value for list of {}", found, expected),
                    self.verbosity,
                );
                Err(TypeError::TypeMismatch { found, expected })
            }
            Some(_) => Ok(()),
            None => {
                output::debug(format!("list kind fixed to {}", found), self.verbosity);
                self.kind = Some(found);
                Ok(())
            }
        }
    }

    /// Insert untyped data at its sorted position.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidValueKind` if the data is neither an
    /// integer nor a string, and `TypeError::TypeMismatch` if its kind
    /// differs from the list's. The list is unchanged in both cases.
    pub fn try_insert(&mut self, data: serde_json::Value) -> Result<(), TypeError> {
        self.insert(Value::try_from(data)?)
    }

    /// Insert every value from `values`, stopping at the first error.
    ///
    /// Values inserted before the error stay in the list.
    ///
    /// # Errors
    ///
    /// Returns the first `TypeError::TypeMismatch` encountered.
    pub fn try_extend<I>(&mut self, values: I) -> Result<(), TypeError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        values.into_iter().try_for_each(|value| self.insert(value))
    }

    /// Remove the first element order-equivalent to `value`.
    ///
    /// Returns `true` if an element was removed. The fixed kind is left as
    /// is, even when the list becomes empty.
    pub fn delete(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();

        let comparator = &self.comparator;
        let slot = seek(&mut self.head, |existing| {
            comparator.compare(existing, &value) != Ordering::Equal
        });

        match slot.take() {
            Some(mut removed) => {
                *slot = removed.take_next();
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Check whether an element order-equivalent to `value` is present.
    ///
    /// The walk stops at the first element that follows `value`.
    pub fn search(&self, value: impl Into<Value>) -> bool {
        let value = value.into();
        for existing in self.iter() {
            match self.comparator.compare(existing, &value) {
                Ordering::Equal => return true,
                Ordering::Greater => return false,
                Ordering::Less => {}
            }
        }
        false
    }

    /// Get the comparator.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<C> SortedList<C> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The kind fixed by the first insert, if any.
    pub fn kind(&self) -> Option<ValueKind> {
        self.kind
    }

    /// The smallest element under the list's ordering.
    pub fn first(&self) -> Option<&Value> {
        self.head.as_deref().map(Node::data)
    }

    /// The largest element under the list's ordering. Walks the chain.
    pub fn last(&self) -> Option<&Value> {
        self.iter().last()
    }

    /// The head node, for read-only inspection of the chain.
    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// Drop every element and forget the fixed kind.
    pub fn clear(&mut self) {
        if self.len > 0 {
            output::debug(
                format!("clearing list of {} elements", self.len),
                self.verbosity,
            );
        }
        self.head = None;
        self.len = 0;
        self.kind = None;
    }

    /// Copy the elements into a vector, head to tail.
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// Iterate over the elements, head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head.as_deref(), self.len)
    }
}

/// Walk from `head` past every node whose value satisfies `advance`.
///
/// Returns the first link that is empty or holds a node that does not.
fn seek(head: &mut Link, mut advance: impl FnMut(&Value) -> bool) -> &mut Link {
    let mut cursor = head;
    while cursor.as_deref().is_some_and(|node| advance(node.data())) {
        if let Some(node) = cursor {
            cursor = node.link_mut();
        }
    }
    cursor
}

impl Default for SortedList<Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clone> Clone for SortedList<C> {
    fn clone(&self) -> Self {
        let mut head: Link = None;
        let mut tail = &mut head;
        for value in self.iter() {
            tail = tail.insert(Box::new(Node::new(value.clone()))).link_mut();
        }

        Self {
            head,
            len: self.len,
            kind: self.kind,
            comparator: self.comparator.clone(),
            verbosity: self.verbosity,
        }
    }
}

impl<C> fmt::Debug for SortedList<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedList")
            .field("kind", &self.kind)
            .field("values", &self.to_vec())
            .finish()
    }
}

impl<C> fmt::Display for SortedList<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_sequence(self.iter()))
    }
}

impl<'a, C> IntoIterator for &'a SortedList<C> {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C> IntoIterator for SortedList<C> {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.head, self.len)
    }
}

impl<C> Serialize for SortedList<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Rebuilds the list with `C::default()` as comparator.
///
/// The comparator is not part of the serialized form, so a list saved under
/// a non-default [`ConfiguredOrder`] comes back in the default order.
impl<'de, C> Deserialize<'de> for SortedList<C>
where
    C: Comparator + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Value>::deserialize(deserializer)?;
        let mut list = Self::with_comparator(C::default());
        list.try_extend(values).map_err(D::Error::custom)?;
        Ok(list)
    }
}
