//! core::node
//!
//! A single cell of a singly-linked chain.
//!
//! A [`Node`] owns its value and exclusively owns the next node. Moving a
//! `Box<Node>` in or out of a link transfers the whole tail with it, and a
//! node that nothing links to any more is dropped.

use std::fmt;

use super::types::{TypeError, Value};

/// An owning link to the next node, or the end of the chain.
pub type Link = Option<Box<Node>>;

/// A list cell holding one [`Value`].
///
/// # Example
///
/// ```
/// use sorted_linked_list::core::node::Node;
///
/// let mut first = Node::new(1);
/// first.set_next(Some(Box::new(Node::new(2))));
///
/// assert_eq!(first.data().as_int(), Some(1));
/// assert_eq!(first.next().and_then(|n| n.data().as_int()), Some(2));
/// assert!(first.next().and_then(|n| n.next()).is_none());
/// ```
pub struct Node {
    data: Value,
    next: Link,
}

impl Node {
    /// Create an unlinked node.
    pub fn new(data: impl Into<Value>) -> Self {
        Self {
            data: data.into(),
            next: None,
        }
    }

    /// Create an unlinked node from untyped data.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidValueKind` if the data is neither an
    /// integer nor a string.
    pub fn try_new(data: serde_json::Value) -> Result<Self, TypeError> {
        Ok(Self::new(Value::try_from(data)?))
    }

    /// Get the stored value.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Replace the stored value, returning the previous one.
    pub fn set_data(&mut self, data: impl Into<Value>) -> Value {
        std::mem::replace(&mut self.data, data.into())
    }

    /// Replace the stored value with untyped data.
    ///
    /// The node is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidValueKind` if the data is neither an
    /// integer nor a string.
    pub fn try_set_data(&mut self, data: serde_json::Value) -> Result<Value, TypeError> {
        let value = Value::try_from(data)?;
        Ok(self.set_data(value))
    }

    /// Get the next node, if any.
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    /// Get the next node mutably, if any.
    pub fn next_mut(&mut self) -> Option<&mut Node> {
        self.next.as_deref_mut()
    }

    /// Replace the link to the next node, returning the previous tail.
    pub fn set_next(&mut self, next: Link) -> Link {
        std::mem::replace(&mut self.next, next)
    }

    /// Detach and return the tail after this node.
    pub fn take_next(&mut self) -> Link {
        self.next.take()
    }

    pub(crate) fn link_mut(&mut self) -> &mut Link {
        &mut self.next
    }

    pub(crate) fn into_parts(mut self) -> (Value, Link) {
        let next = self.next.take();
        let data = std::mem::replace(&mut self.data, Value::Int(0));
        (data, next)
    }
}

// Only the link state is shown, so formatting never follows the chain.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

impl Drop for Node {
    // Unlink iteratively so a long tail does not recurse once per node.
    fn drop(&mut self) {
        let mut link = self.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}
