//! Integration tests for difference reporting
//!
//! Tests that the first divergence between two containers is located and
//! rendered for failure messages.

use deepeq_foundation::{Difference, Mapping, Values};

#[test]
fn no_difference_for_rebuilt_values() {
    let a = Values::gather([1, 2, 3]);
    let b = Values::map([0, 1, 2], |n| n + 1);
    assert!(a.first_difference(&b).is_none());
}

#[test]
fn first_element_difference_reported() {
    let a = Values::gather(["x", "y", "z"]);
    let b = Values::gather(["x", "q", "r"]);
    assert_eq!(
        a.first_difference(&b),
        Some(Difference::Element {
            index: 1,
            left: &"y",
            right: &"q",
        })
    );
}

#[test]
fn length_difference_reported_after_common_prefix() {
    let a = Values::gather([1, 2, 3]);
    let b = Values::gather([1]);
    let diff = a.first_difference(&b).unwrap();
    assert!(diff.is_length());
    assert_eq!(diff.index(), 1);
    assert_eq!(diff.to_string(), "lengths differ: 3 vs 1");
}

#[test]
fn difference_agrees_with_equality() {
    let cases = [
        (vec![], vec![]),
        (vec![1], vec![1]),
        (vec![1], vec![2]),
        (vec![1, 2], vec![1]),
        (vec![], vec![5]),
    ];
    for (left, right) in cases {
        let a = Values::from(left);
        let b = Values::from(right);
        assert_eq!(a == b, a.first_difference(&b).is_none());
    }
}

#[test]
fn mapping_reordered_reports_first_position() {
    let a = Mapping::gather([("a", 1), ("b", 2)]);
    let b = Mapping::gather([("b", 2), ("a", 1)]);
    let diff = a.first_difference(&b).unwrap();
    assert_eq!(diff.index(), 0);
    assert_eq!(diff.to_string(), "element 0 differs: (\"a\", 1) vs (\"b\", 2)");
}
