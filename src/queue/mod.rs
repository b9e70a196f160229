//! # String Queue
//!
//! A queue of owned string payloads stored as a sentinel ring of
//! [`Element`]s. Every operation is expressed as [`ring::Link`]
//! manipulation plus lexicographic payload comparison; the sentinel a
//! queue is created with is the sentinel it keeps for its whole life,
//! so reordering, sorting and merging never invalidate the handle.
//!
//! The queue owns every element currently linked into it. Removal hands
//! the element back as a [`Box<Element>`]; releasing it is then a drop
//! effect at the end of the caller's scope.
//!
//! ```
//! use circq::queue::Queue;
//!
//! let mut q = Queue::new();
//! q.insert_tail("hello");
//! q.insert_head("world");
//! assert_eq!(q.len(), 2);
//!
//! let el = q.remove_head(None).unwrap();
//! assert_eq!(el.value(), "world");
//! ```
//!
//! [`ring::Link`]: crate::ring::Link

use alloc::boxed::Box;
use core::fmt;
use core::ptr::NonNull;

use crate::ring::Link;

pub mod chain;
pub mod element;
pub mod iter;

mod reorder;
mod sort;

pub use chain::QueueChain;
pub use element::Element;
pub use iter::Iter;

/// A queue of owned strings backed by a circular intrusive ring.
///
/// The sentinel link lives on the heap so its address stays stable no
/// matter how the elements around it are rewired.
pub struct Queue {
    head: NonNull<Link>,
}

impl Queue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        let head = NonNull::from(Box::leak(Box::new(Link::new())));
        unsafe { Link::init(head) };
        Queue { head }
    }

    pub(crate) fn sentinel(&self) -> NonNull<Link> {
        self.head
    }

    /// Allocates an element owning a copy of `text` and links it at the
    /// head of the queue.
    pub fn insert_head(&mut self, text: &str) {
        let el = Element::alloc(text);
        unsafe { Link::insert_after(el, self.head) };
    }

    /// Allocates an element owning a copy of `text` and links it at the
    /// tail of the queue.
    pub fn insert_tail(&mut self, text: &str) {
        let el = Element::alloc(text);
        unsafe { Link::insert_before(el, self.head) };
    }

    /// Unlinks the head element and transfers its ownership to the
    /// caller. If `buf` is supplied the payload is copied into it first,
    /// truncated and zero terminated. Returns `None` on an empty queue,
    /// without mutating anything.
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Box<Element>> {
        unsafe {
            if Link::is_empty(self.head) {
                return None;
            }
            self.detach(Link::next(self.head), buf)
        }
    }

    /// Like [`Queue::remove_head`], for the tail element.
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Box<Element>> {
        unsafe {
            if Link::is_empty(self.head) {
                return None;
            }
            self.detach(Link::prev(self.head), buf)
        }
    }

    unsafe fn detach(&mut self, node: NonNull<Link>, buf: Option<&mut [u8]>) -> Option<Box<Element>> {
        unsafe {
            Link::unlink(node);
            let el = Element::reclaim(node);
            if let Some(buf) = buf {
                el.copy_value(buf);
            }
            Some(el)
        }
    }

    /// Number of elements, counted by traversal. O(n).
    pub fn len(&self) -> usize {
        unsafe { ring_len(self.head) }
    }

    /// Returns `true` if the queue holds no element. O(1).
    pub fn is_empty(&self) -> bool {
        unsafe { Link::is_empty(self.head) }
    }

    /// Returns `true` if the queue holds exactly one element. O(1).
    pub fn is_singular(&self) -> bool {
        unsafe { Link::is_singular(self.head) }
    }

    /// Iterates over the payloads in queue order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        while self.remove_head(None).is_some() {}
        // every element is released; reclaim the bare sentinel
        unsafe { drop(Box::from_raw(self.head.as_ptr())) };
    }
}

// The queue owns its sentinel and every linked element, and `&self`
// methods only read.
unsafe impl Send for Queue {}
unsafe impl Sync for Queue {}

pub(crate) unsafe fn ring_len(head: NonNull<Link>) -> usize {
    let mut n = 0;
    unsafe {
        let mut cur = Link::next(head);
        while cur != head {
            n += 1;
            cur = Link::next(cur);
        }
    }
    n
}

#[cfg(test)]
mod tests;
