//! Snapshot tests for list rendering.
//!
//! Display, Debug and JSON forms are pinned with inline snapshots so that
//! formatting changes show up in review.

use insta::assert_snapshot;

use sorted_linked_list::{SortedList, Value};

fn ints(values: &[i64]) -> SortedList {
    let mut list = SortedList::new();
    list.try_extend(values.iter().copied()).unwrap();
    list
}

#[test]
fn display_empty() {
    assert_snapshot!(SortedList::new().to_string(), @"[]");
}

#[test]
fn display_integers() {
    assert_snapshot!(ints(&[3, 1, 2]).to_string(), @"[1, 2, 3]");
    assert_snapshot!(ints(&[5, 2, 8, 1, 9]).to_string(), @"[1, 2, 5, 8, 9]");
}

#[test]
fn display_duplicates_after_delete() {
    let mut list = ints(&[5, 5, 5]);
    assert!(list.delete(5));
    assert_snapshot!(list.to_string(), @"[5, 5]");
}

#[test]
fn display_strings() {
    let mut list = SortedList::new();
    list.try_extend(["banana", "apple", "cherry"]).unwrap();
    assert_snapshot!(list.to_string(), @"[apple, banana, cherry]");
}

#[test]
fn display_reverse() {
    let mut list = SortedList::with_comparator(|a: &Value, b: &Value| b.cmp(a));
    list.try_extend([-10, -3, 0, 5]).unwrap();
    assert_snapshot!(list.to_string(), @"[5, 0, -3, -10]");
}

#[test]
fn debug_form() {
    let list = ints(&[2, 1]);
    assert_snapshot!(
        format!("{:?}", list),
        @r#"SortedList { kind: Some(Integer), values: [Int(1), Int(2)] }"#
    );
}

#[test]
fn json_form() {
    let mut list = SortedList::new();
    list.try_extend(["b", "a"]).unwrap();
    assert_snapshot!(serde_json::to_string(&list).unwrap(), @r#"["a","b"]"#);
}
