//! core::types
//!
//! Strong types for the values a list can hold.
//!
//! # Types
//!
//! - [`Value`] - A stored element: a signed integer or a text string
//! - [`ValueKind`] - The discriminant of a [`Value`]
//! - [`TypeError`] - Kind violations raised by nodes and lists
//!
//! # Validation
//!
//! [`Value`] is a closed sum type, so anything typed as a `Value` is already
//! valid. Untyped data (JSON) crosses into the crate through
//! `TryFrom<serde_json::Value>`, which is where a bad kind is reported.
//! Deserializing a `Value` goes through the same check.
//!
//! # Examples
//!
//! ```
//! use sorted_linked_list::core::types::{Value, ValueKind};
//!
//! let n = Value::from(42);
//! let s = Value::from("hello");
//! assert_eq!(n.kind(), ValueKind::Integer);
//! assert_eq!(s.kind(), ValueKind::Text);
//!
//! // Untyped data is checked at the boundary
//! assert!(Value::try_from(serde_json::json!(3.14)).is_err());
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors from value kind checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The data is neither an integer nor a string.
    #[error("node data must be int or string, {found} given")]
    InvalidValueKind { found: String },

    /// The value's kind differs from the kind the list has fixed.
    #[error(
        "cannot insert {found} into list of {expected}. All elements must be of the same type."
    )]
    TypeMismatch {
        found: ValueKind,
        expected: ValueKind,
    },
}

/// The kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Integer,
    Text,
}

impl ValueKind {
    /// Name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Text => "string",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single list element.
///
/// The derived ordering is the natural one: integers numerically, text by
/// code point. Across kinds every integer sorts before every string, which
/// only matters when a lookup is made with the wrong kind.
///
/// # Example
///
/// ```
/// use sorted_linked_list::core::types::Value;
///
/// assert!(Value::from(-3) < Value::from(2));
/// assert!(Value::from("apple") < Value::from("banana"));
/// assert_eq!(Value::from("café").to_string(), "café");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    /// Get the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Integer,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Get the integer, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Get the text, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Int(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = TypeError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value as Json;

        let found = match json {
            Json::String(s) => return Ok(Value::Text(s)),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(Value::Int(i));
                }
                if n.is_u64() {
                    "unsigned integer"
                } else {
                    "float"
                }
            }
            Json::Null => "null",
            Json::Bool(_) => "boolean",
            Json::Array(_) => "array",
            Json::Object(_) => "object",
        };
        Err(TypeError::InvalidValueKind {
            found: found.to_string(),
        })
    }
}

// Deserialized data goes through the same kind check as other untyped input.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Value::try_from(json).map_err(D::Error::custom)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}
