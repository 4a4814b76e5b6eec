//! core::compare
//!
//! Ordering strategies for sorted lists.
//!
//! # Overview
//!
//! A list is parameterized by a [`Comparator`], chosen once at construction.
//! The comparator decides every ordering question the list asks during
//! insert, delete and search.
//!
//! - [`Natural`] - integers numerically, text by code point (the default)
//! - [`ConfiguredOrder`] - direction and text collation from a config file
//! - any `Fn(&Value, &Value) -> Ordering` closure
//!
//! Comparators are not validated. One that is not a total order gives an
//! unspecified, but memory-safe, element order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::types::Value;

/// A three-way comparison over list values.
///
/// `Less` means `a` precedes `b`, `Equal` means they are order-equivalent,
/// `Greater` means `a` follows `b`.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use sorted_linked_list::core::compare::Comparator;
/// use sorted_linked_list::core::types::Value;
///
/// let reverse = |a: &Value, b: &Value| b.cmp(a);
/// assert_eq!(reverse.compare(&Value::from(1), &Value::from(5)), Ordering::Greater);
/// ```
pub trait Comparator {
    fn compare(&self, a: &Value, b: &Value) -> Ordering;
}

impl<F> Comparator for F
where
    F: Fn(&Value, &Value) -> Ordering,
{
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        self(a, b)
    }
}

/// Default ordering: numeric for integers, code-point order for text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl Comparator for Natural {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        a.cmp(b)
    }
}

/// Direction of a configured ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// How text values are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collation {
    /// Code-point order.
    #[default]
    Ordinal,
    /// Code-point order after lowercasing both sides.
    CaseInsensitive,
}

/// An ordering assembled from configuration.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use sorted_linked_list::core::compare::{Collation, Comparator, ConfiguredOrder, SortOrder};
/// use sorted_linked_list::core::types::Value;
///
/// let order = ConfiguredOrder::new(SortOrder::Ascending, Collation::CaseInsensitive);
/// assert_eq!(
///     order.compare(&Value::from("apple"), &Value::from("Banana")),
///     Ordering::Less
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfiguredOrder {
    pub order: SortOrder,
    pub collation: Collation,
}

impl ConfiguredOrder {
    pub fn new(order: SortOrder, collation: Collation) -> Self {
        Self { order, collation }
    }
}

impl Comparator for ConfiguredOrder {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let ordering = match (self.collation, a, b) {
            (Collation::CaseInsensitive, Value::Text(a), Value::Text(b)) => a
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase)),
            _ => a.cmp(b),
        };
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(value: impl Into<Value>) -> Value {
        value.into()
    }

    mod natural {
        use super::*;

        #[test]
        fn integers_numeric() {
            assert_eq!(Natural.compare(&v(2), &v(10)), Ordering::Less);
            assert_eq!(Natural.compare(&v(10), &v(10)), Ordering::Equal);
            assert_eq!(Natural.compare(&v(-1), &v(-5)), Ordering::Greater);
        }

        #[test]
        fn text_code_point() {
            assert_eq!(Natural.compare(&v("apple"), &v("banana")), Ordering::Less);
            assert_eq!(Natural.compare(&v("Zebra"), &v("apple")), Ordering::Less);
            assert_eq!(Natural.compare(&v("café"), &v("cafe")), Ordering::Greater);
        }
    }

    mod closures {
        use super::*;

        #[test]
        fn closure_is_a_comparator() {
            let by_len = |a: &Value, b: &Value| {
                let len = |x: &Value| x.as_str().map_or(0, str::len);
                len(a).cmp(&len(b))
            };
            assert_eq!(by_len.compare(&v("ab"), &v("xy")), Ordering::Equal);
            assert_eq!(by_len.compare(&v("a"), &v("abc")), Ordering::Less);
        }
    }

    mod configured {
        use super::*;

        #[test]
        fn default_matches_natural() {
            let order = ConfiguredOrder::default();
            assert_eq!(order.compare(&v(1), &v(2)), Natural.compare(&v(1), &v(2)));
            assert_eq!(
                order.compare(&v("Zebra"), &v("apple")),
                Natural.compare(&v("Zebra"), &v("apple"))
            );
        }

        #[test]
        fn descending_reverses() {
            let order = ConfiguredOrder::new(SortOrder::Descending, Collation::Ordinal);
            assert_eq!(order.compare(&v(1), &v(5)), Ordering::Greater);
            assert_eq!(order.compare(&v(5), &v(5)), Ordering::Equal);
        }

        #[test]
        fn case_insensitive_text() {
            let order = ConfiguredOrder::new(SortOrder::Ascending, Collation::CaseInsensitive);
            assert_eq!(order.compare(&v("Zebra"), &v("apple")), Ordering::Greater);
            assert_eq!(order.compare(&v("HELLO"), &v("hello")), Ordering::Equal);
            assert_eq!(order.compare(&v("Über"), &v("über")), Ordering::Equal);
        }

        #[test]
        fn collation_does_not_touch_integers() {
            let order = ConfiguredOrder::new(SortOrder::Ascending, Collation::CaseInsensitive);
            assert_eq!(order.compare(&v(3), &v(30)), Ordering::Less);
        }
    }
}
