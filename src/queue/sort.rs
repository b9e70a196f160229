//! Ordering algorithms: stable two-way merge, recursive merge sort and
//! the skyline (`ascend`/`descend`) filters. The merge and the sort work
//! on bare ring sentinels so recursion can split through stack-local
//! sub-rings without allocating.

use core::ptr::NonNull;

use crate::ring::Link;

use super::element::value_of;
use super::{Element, Queue};

impl Queue {
    /// Merges two sorted queues into this one, appending at the tail.
    ///
    /// Fronts are compared lexicographically and the lesser one (greater
    /// when `descending`) relocated; ties take from `left`, which keeps
    /// the merge stable. Whichever side outlasts the other is spliced
    /// over in one step. Both sources end empty. O(n + m), no
    /// allocation.
    pub fn merge_from(&mut self, left: &mut Queue, right: &mut Queue, descending: bool) {
        unsafe { merge_rings(self.head, left.head, right.head, descending) };
    }

    /// Sorts the queue lexicographically, ascending unless `descending`.
    ///
    /// Classic recursive merge sort over the ring: split at the
    /// structural midpoint found by a slow/fast walk, recurse, recombine
    /// with the stable two-way merge. O(n log n) time, O(log n) stack,
    /// zero heap allocation.
    pub fn sort(&mut self, descending: bool) {
        unsafe { sort_ring(self.head, descending) };
    }

    /// Releases every element with a strictly lesser payload somewhere
    /// to its right, keeping the non-decreasing suffix skyline. Returns
    /// the surviving element count.
    pub fn ascend(&mut self) -> usize {
        unsafe { skyline(self.head, false) }
    }

    /// Releases every element with a strictly greater payload somewhere
    /// to its right, keeping the non-increasing suffix skyline. Returns
    /// the surviving element count.
    pub fn descend(&mut self) -> usize {
        unsafe { skyline(self.head, true) }
    }
}

/// Relocates elements from `left` and `right` to `dest`'s tail in sorted
/// order. All three must be distinct initialized sentinels.
pub(crate) unsafe fn merge_rings(
    dest: NonNull<Link>,
    left: NonNull<Link>,
    right: NonNull<Link>,
    descending: bool,
) {
    unsafe {
        while !Link::is_empty(left) && !Link::is_empty(right) {
            let l = Link::next(left);
            let r = Link::next(right);
            let take_left = if descending {
                value_of(l) >= value_of(r)
            } else {
                value_of(l) <= value_of(r)
            };
            let take = if take_left { l } else { r };
            Link::unlink(take);
            Link::insert_before(take, dest);
        }
        let rest = if Link::is_empty(left) { right } else { left };
        Link::splice_tail(rest, dest);
    }
}

unsafe fn sort_ring(head: NonNull<Link>, descending: bool) {
    unsafe {
        if Link::is_empty(head) || Link::is_singular(head) {
            return;
        }

        // midpoint by slow/fast walk; slow ends on the last node of the
        // first half
        let mut slow = Link::next(head);
        let mut fast = Link::next(head);
        loop {
            fast = Link::next(fast);
            if fast == head {
                break;
            }
            fast = Link::next(fast);
            if fast == head {
                break;
            }
            slow = Link::next(slow);
        }

        let mut left = Link::new();
        let left = NonNull::from(&mut left);
        Link::cut(left, head, slow);

        sort_ring(left, descending);
        sort_ring(head, descending);

        let mut right = Link::new();
        let right = NonNull::from(&mut right);
        Link::init(right);
        Link::splice_tail(head, right);

        merge_rings(head, left, right, descending);
    }
}

/// Single right-to-left scan with a running best-seen payload. With
/// `keep_max` the running best is the maximum (descend), otherwise the
/// minimum (ascend); an element losing to the best-seen is released.
unsafe fn skyline(head: NonNull<Link>, keep_max: bool) -> usize {
    unsafe {
        if Link::is_empty(head) {
            return 0;
        }
        let mut best = Link::prev(head);
        let mut kept = 1;
        let mut cur = Link::prev(best);
        while cur != head {
            let prior = Link::prev(cur);
            let keep = if keep_max {
                value_of(cur) >= value_of(best)
            } else {
                value_of(cur) <= value_of(best)
            };
            if keep {
                best = cur;
                kept += 1;
            } else {
                Link::unlink(cur);
                drop(Element::reclaim(cur));
            }
            cur = prior;
        }
        kept
    }
}
