extern crate std;

use std::format;
use std::vec;

use super::{collected, from_values};
use crate::queue::Queue;

#[test]
fn test_new_queue_is_empty() {
    let mut q = Queue::new();
    assert!(q.is_empty());
    assert!(!q.is_singular());
    assert_eq!(q.len(), 0);
    assert!(q.remove_head(None).is_none());
    assert!(q.remove_tail(None).is_none());
}

#[test]
fn test_insert_head_orders_lifo() {
    let mut q = Queue::new();
    q.insert_head("a");
    q.insert_head("b");
    q.insert_head("c");
    assert_eq!(collected(&q), vec!["c", "b", "a"]);
}

#[test]
fn test_insert_tail_orders_fifo() {
    let q = from_values(&["a", "b", "c"]);
    assert_eq!(collected(&q), vec!["a", "b", "c"]);
    assert_eq!(q.len(), 3);
}

#[test]
fn test_singular() {
    let mut q = Queue::new();
    q.insert_tail("only");
    assert!(q.is_singular());
    q.insert_tail("two");
    assert!(!q.is_singular());
}

#[test]
fn test_remove_head_transfers_ownership() {
    let mut q = from_values(&["a", "b"]);
    let el = q.remove_head(None).unwrap();
    assert_eq!(el.value(), "a");
    assert_eq!(q.len(), 1);

    let el = q.remove_tail(None).unwrap();
    assert_eq!(el.value(), "b");
    assert!(q.is_empty());
}

#[test]
fn test_remove_copies_into_buffer() {
    let mut q = from_values(&["hello"]);
    let mut buf = [0xffu8; 16];
    let el = q.remove_head(Some(&mut buf)).unwrap();
    assert_eq!(el.value(), "hello");
    assert_eq!(&buf[..5], b"hello");
    assert_eq!(buf[5], 0);
}

#[test]
fn test_remove_truncates_and_terminates() {
    let mut q = from_values(&["elephant"]);
    let mut buf = [0xffu8; 4];
    q.remove_head(Some(&mut buf)).unwrap();
    // three payload bytes plus the terminator, nothing past capacity
    assert_eq!(&buf, b"ele\0");

    let mut q = from_values(&["x"]);
    let mut empty: [u8; 0] = [];
    q.remove_head(Some(&mut empty)).unwrap();
}

#[test]
fn test_len_tracks_inserts_minus_removes() {
    let mut q = Queue::new();
    for i in 0..10 {
        q.insert_tail(&format!("v{i}"));
    }
    for _ in 0..4 {
        q.remove_head(None);
    }
    assert_eq!(q.len(), 6);
    for _ in 0..10 {
        q.remove_tail(None);
    }
    assert_eq!(q.len(), 0);
}

#[test]
fn test_payload_is_duplicated() {
    let text = std::string::String::from("owned");
    let mut q = Queue::new();
    q.insert_tail(&text);
    drop(text);
    assert_eq!(q.iter().next(), Some("owned"));
}

#[test]
fn test_debug_lists_values() {
    let q = from_values(&["a", "b"]);
    assert_eq!(format!("{q:?}"), "[\"a\", \"b\"]");
}
