//! Structural mutation: middle deletion, duplicate elimination, pair
//! swapping and the reversal family. Everything here rewires links in
//! place; payloads are never copied.

use core::ptr::NonNull;

use crate::ring::Link;

use super::element::value_of;
use super::{Element, Queue, ring_len};

impl Queue {
    /// Deletes the middle element, located with a slow/fast walk (the
    /// fast pointer advances two links per step). For even length the
    /// element just past the true midpoint, index `n / 2`, is the one
    /// removed; that tie-break is part of the contract. Returns `false`
    /// on an empty queue.
    pub fn delete_middle(&mut self) -> bool {
        unsafe {
            let head = self.head;
            if Link::is_empty(head) {
                return false;
            }
            let mut slow = Link::next(head);
            let mut fast = Link::next(head);
            while fast != head && Link::next(fast) != head {
                slow = Link::next(slow);
                fast = Link::next(Link::next(fast));
            }
            Link::unlink(slow);
            drop(Element::reclaim(slow));
        }
        true
    }

    /// Releases every element whose payload occurs more than once.
    ///
    /// Each anchor scans the whole remaining suffix, so duplicates are
    /// found at arbitrary positions, not just adjacent ones; on sorted
    /// input this coincides with the usual "drop every value with
    /// multiplicity >= 2" semantics. O(n²). Returns `false` on an empty
    /// queue.
    pub fn delete_duplicates(&mut self) -> bool {
        unsafe {
            let head = self.head;
            if Link::is_empty(head) {
                return false;
            }
            let mut cur = Link::next(head);
            while cur != head {
                let mut matched = false;
                let mut probe = Link::next(cur);
                while probe != head {
                    let after = Link::next(probe);
                    if value_of(probe) == value_of(cur) {
                        Link::unlink(probe);
                        drop(Element::reclaim(probe));
                        matched = true;
                    }
                    probe = after;
                }
                // snapshot only after the suffix scan settled cur's successor
                let next = Link::next(cur);
                if matched {
                    Link::unlink(cur);
                    drop(Element::reclaim(cur));
                }
                cur = next;
            }
        }
        true
    }

    /// Exchanges every two adjacent elements in place. An odd trailing
    /// element is left where it is.
    pub fn swap_pairs(&mut self) {
        unsafe {
            let head = self.head;
            let mut cur = Link::next(head);
            while cur != head && Link::next(cur) != head {
                let second = Link::next(cur);
                Link::unlink(cur);
                Link::insert_after(cur, second);
                cur = Link::next(cur);
            }
        }
    }

    /// Reverses element order in place. O(n), no allocation.
    pub fn reverse(&mut self) {
        unsafe { Link::reverse(self.head) };
    }

    /// Reverses each consecutive group of exactly `k` elements in place;
    /// a trailing group shorter than `k` keeps its original order.
    /// `k == 0` is an invalid argument, rejected with `false` before any
    /// mutation; `k == 1` is trivially a no-op.
    pub fn reverse_k_groups(&mut self, k: usize) -> bool {
        if k == 0 {
            return false;
        }
        if k == 1 {
            return true;
        }
        unsafe {
            let head = self.head;
            let groups = ring_len(head) / k;

            let mut acc = Link::new();
            let acc = NonNull::from(&mut acc);
            Link::init(acc);
            let mut group = Link::new();
            let group = NonNull::from(&mut group);

            for _ in 0..groups {
                let mut boundary = Link::next(head);
                for _ in 1..k {
                    boundary = Link::next(boundary);
                }
                Link::cut(group, head, boundary);
                Link::reverse(group);
                Link::splice_tail(group, acc);
            }
            // partial trailing group, in original order
            Link::splice_tail(head, acc);
            Link::splice_tail(acc, head);
        }
        true
    }
}
