extern crate std;

use std::format;
use std::string::String;
use std::vec;
use std::vec::Vec;

use rand::seq::SliceRandom;

use super::{collected, from_values};
use crate::queue::Queue;

#[test]
fn test_sort_ascending() {
    let mut q = from_values(&["pear", "apple", "banana", "cherry"]);
    q.sort(false);
    assert_eq!(collected(&q), vec!["apple", "banana", "cherry", "pear"]);
}

#[test]
fn test_sort_descending() {
    let mut q = from_values(&["pear", "apple", "banana", "cherry"]);
    q.sort(true);
    assert_eq!(collected(&q), vec!["pear", "cherry", "banana", "apple"]);
}

#[test]
fn test_sort_degenerate() {
    let mut q = Queue::new();
    q.sort(false);
    assert!(q.is_empty());

    let mut q = from_values(&["one"]);
    q.sort(false);
    assert_eq!(collected(&q), vec!["one"]);
}

#[test]
fn test_sort_is_permutation_of_input() {
    let mut values: Vec<String> = (0..500).map(|i| format!("key{:03}", i % 100)).collect();
    values.shuffle(&mut rand::rng());

    let mut q = Queue::new();
    for v in &values {
        q.insert_tail(v);
    }
    q.sort(false);

    let sorted = collected(&q);
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let mut expected = values.clone();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn test_sort_sorted_input_is_stable() {
    let mut q = from_values(&["a", "b", "b", "c"]);
    q.sort(false);
    let once = collected(&q);
    q.sort(false);
    assert_eq!(collected(&q), once);
    assert_eq!(once, vec!["a", "b", "b", "c"]);
}

#[test]
fn test_merge_from_two_sorted_queues() {
    let mut dest = Queue::new();
    let mut left = from_values(&["a", "c"]);
    let mut right = from_values(&["b", "d"]);

    dest.merge_from(&mut left, &mut right, false);
    assert_eq!(collected(&dest), vec!["a", "b", "c", "d"]);
    assert!(left.is_empty());
    assert!(right.is_empty());
}

#[test]
fn test_merge_from_appends_to_tail() {
    let mut dest = from_values(&["0"]);
    let mut left = from_values(&["a"]);
    let mut right = from_values(&["b"]);
    dest.merge_from(&mut left, &mut right, false);
    assert_eq!(collected(&dest), vec!["0", "a", "b"]);
}

#[test]
fn test_merge_from_descending() {
    let mut dest = Queue::new();
    let mut left = from_values(&["d", "b"]);
    let mut right = from_values(&["c", "a"]);
    dest.merge_from(&mut left, &mut right, true);
    assert_eq!(collected(&dest), vec!["d", "c", "b", "a"]);
}

#[test]
fn test_merge_from_exhausted_side_splices_remainder() {
    let mut dest = Queue::new();
    let mut left = from_values(&["a"]);
    let mut right = from_values(&["b", "c", "d"]);
    dest.merge_from(&mut left, &mut right, false);
    assert_eq!(collected(&dest), vec!["a", "b", "c", "d"]);

    let mut dest = Queue::new();
    let mut left = Queue::new();
    let mut right = from_values(&["x"]);
    dest.merge_from(&mut left, &mut right, false);
    assert_eq!(collected(&dest), vec!["x"]);
}

#[test]
fn test_ascend_keeps_suffix_minima() {
    let mut q = from_values(&["b", "a", "c", "a"]);
    assert_eq!(q.ascend(), 2);
    // "b" and "c" both have a strictly lesser "a" to their right; the
    // equal "a" pair survives (duplicates are not ascend's job)
    assert_eq!(collected(&q), vec!["a", "a"]);
}

#[test]
fn test_descend_keeps_suffix_maxima() {
    let mut q = from_values(&["b", "d", "a", "c", "c"]);
    assert_eq!(q.descend(), 3);
    assert_eq!(collected(&q), vec!["d", "c", "c"]);
}

#[test]
fn test_skyline_degenerate() {
    let mut q = Queue::new();
    assert_eq!(q.ascend(), 0);
    assert_eq!(q.descend(), 0);

    let mut q = from_values(&["solo"]);
    assert_eq!(q.ascend(), 1);
    assert_eq!(collected(&q), vec!["solo"]);
}

#[test]
fn test_ascend_on_ascending_input_keeps_all() {
    let mut q = from_values(&["a", "b", "c"]);
    assert_eq!(q.ascend(), 3);
    assert_eq!(collected(&q), vec!["a", "b", "c"]);

    let mut q = from_values(&["c", "b", "a"]);
    assert_eq!(q.ascend(), 1);
    assert_eq!(collected(&q), vec!["a"]);
}
