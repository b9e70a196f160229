mod basic;
mod sort;

extern crate std;

use std::string::String;
use std::vec::Vec;

use super::Queue;

/// Builds a queue by tail-inserting `values` in order.
fn from_values(values: &[&str]) -> Queue {
    let mut q = Queue::new();
    for v in values {
        q.insert_tail(v);
    }
    q
}

fn collected(q: &Queue) -> Vec<String> {
    q.iter().map(String::from).collect()
}
