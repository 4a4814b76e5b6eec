//! core::list::iter
//!
//! Forward iterators over a sorted list.
//!
//! [`Iter`] is a cursor that holds a shared borrow of the current node. The
//! borrow keeps the list from being mutated while iteration is in progress,
//! so a relinked or truncated chain can never be observed mid-walk.

use std::fmt;
use std::iter::{self, FusedIterator};

use crate::core::node::{Link, Node};
use crate::core::types::Value;

/// Borrowing iterator over the values of a list, head to tail.
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(head: Option<&'a Node>, len: usize) -> Self {
        Self {
            next: head,
            remaining: len,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.remaining -= 1;
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .field("values", &Chain(self.next))
            .finish()
    }
}

/// Owning iterator that unlinks values from the head as it goes.
pub struct IntoIter {
    head: Link,
    remaining: usize,
}

impl IntoIter {
    pub(crate) fn new(head: Link, len: usize) -> Self {
        Self {
            head,
            remaining: len,
        }
    }
}

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.head.take()?;
        let (value, next) = (*node).into_parts();
        self.head = next;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl fmt::Debug for IntoIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.remaining)
            .field("values", &Chain(self.head.as_deref()))
            .finish()
    }
}

/// Formats the values from a node onward as a flat list.
struct Chain<'a>(Option<&'a Node>);

impl fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(iter::successors(self.0, |node| node.next()).map(Node::data))
            .finish()
    }
}
