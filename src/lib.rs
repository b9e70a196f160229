//! # circq
//!
//! A circular, intrusive, doubly linked ring and a string queue built on
//! top of it.
//!
//! ## Core Components
//!
//! - [`ring`]: the raw link primitive. A [`ring::Link`] embeds `next`/`prev`
//!   pointers that always form a closed ring around a sentinel; the module
//!   exposes constant-time insert, unlink, splice and cut, and is the only
//!   place in the crate that rewires pointers.
//! - [`queue`]: a queue of owned string payloads expressed entirely as ring
//!   manipulation plus lexicographic comparison. Besides plain insert and
//!   remove it carries the in-place algorithms: duplicate elimination,
//!   pair swapping, whole-list and k-group reversal, skyline filtering,
//!   two-way merge, merge sort, and a k-way merge across a chain of queues.
//!
//! ## Safety
//!
//! The [`ring`] primitives are `unsafe` and trust the caller to hand them
//! well formed rings. [`queue::Queue`] wraps them into a safe interface and
//! is the intended entry point:
//!
//! ```
//! use circq::queue::Queue;
//!
//! let mut q = Queue::new();
//! q.insert_tail("banana");
//! q.insert_tail("apple");
//! q.insert_head("cherry");
//! q.sort(false);
//!
//! let order: Vec<&str> = q.iter().collect();
//! assert_eq!(order, ["apple", "banana", "cherry"]);
//! ```
//!
//! The structure is deliberately single threaded: no operation locks,
//! suspends or yields, and a queue must not be touched from two threads
//! at once.

#![no_std]

extern crate alloc;

pub mod queue;
pub mod ring;
