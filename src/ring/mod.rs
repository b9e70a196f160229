//! # Intrusive Ring
//!
//! This module provides the link primitive underneath every queue: a
//! circular doubly linked list with a sentinel node marking the logical
//! head/tail boundary.
//!
//! ## Core Components
//!
//! - [`link::Link`]: two pointers forming the ring. An empty ring's
//!   sentinel points at itself in both directions; pointers are never
//!   null in a well formed ring.
//!
//! ## Safety
//!
//! Every operation here is `unsafe` and trusts its caller. The user of
//! this module is responsible for upholding several invariants:
//!
//! - For every node `n` in a ring, `n.prev.next == n` and
//!   `n.next.prev == n`, and following `next` from any node eventually
//!   returns to it.
//! - A node must not be in two rings at the same time.
//! - An unlinked node's own pointers are stale and must not be followed.
//!
//! Higher layers never rewire pointers themselves; all link mutation in
//! the crate funnels through this module.

pub mod link;

pub use link::Link;
