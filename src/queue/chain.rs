//! A second-level ring used to chain independent queues together for
//! k-way merging. Chain nodes pair a queue's sentinel with a size tag;
//! the chain owns its nodes but never the element storage of the queues
//! it threads together.

use alloc::boxed::Box;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::ring::Link;

use super::sort::merge_rings;
use super::{Queue, ring_len};

/// A chain node: a queue's sentinel plus merge bookkeeping.
#[repr(C)]
struct QueueContext {
    link: Link,
    queue: NonNull<Link>,
    size: usize,
}

impl QueueContext {
    /// # Safety
    ///
    /// `link` must be the link of a live `QueueContext`, never the chain
    /// sentinel.
    unsafe fn from_link<'a>(link: NonNull<Link>) -> &'a mut QueueContext {
        unsafe { &mut *link.cast::<QueueContext>().as_ptr() }
    }
}

/// A ring of queues, borrowed for the chain's lifetime so no queue can
/// be touched behind the merge's back.
///
/// ```
/// use circq::queue::{Queue, QueueChain};
///
/// let mut a = Queue::new();
/// a.insert_tail("a");
/// a.insert_tail("c");
/// let mut b = Queue::new();
/// b.insert_tail("b");
/// b.insert_tail("d");
///
/// let mut chain = QueueChain::new();
/// chain.push(&mut a);
/// chain.push(&mut b);
/// assert_eq!(chain.merge(false), 4);
/// drop(chain);
///
/// assert_eq!(a.iter().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
/// assert!(b.is_empty());
/// ```
pub struct QueueChain<'a> {
    head: NonNull<Link>,
    _queues: PhantomData<&'a mut Queue>,
}

impl<'a> QueueChain<'a> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        let head = NonNull::from(Box::leak(Box::new(Link::new())));
        unsafe { Link::init(head) };
        QueueChain {
            head,
            _queues: PhantomData,
        }
    }

    /// Appends a context for `queue` at the end of the chain. The queue
    /// stays mutably borrowed until the chain is dropped.
    pub fn push(&mut self, queue: &'a mut Queue) {
        let ctx = Box::new(QueueContext {
            link: Link::new(),
            queue: queue.sentinel(),
            size: queue.len(),
        });
        let link = NonNull::from(Box::leak(ctx)).cast();
        unsafe { Link::insert_before(link, self.head) };
    }

    /// Number of chained queues. O(n).
    pub fn len(&self) -> usize {
        unsafe { ring_len(self.head) }
    }

    /// Returns `true` if no queue is chained.
    pub fn is_empty(&self) -> bool {
        unsafe { Link::is_empty(self.head) }
    }

    /// Merges every chained queue into the first one, which accumulates
    /// the result in sorted order; each of its inputs must already be
    /// sorted the same way. Every subsequent queue ends empty. Returns
    /// the merged queue's final size, 0 for an empty chain.
    pub fn merge(&mut self, descending: bool) -> usize {
        unsafe {
            if Link::is_empty(self.head) {
                return 0;
            }
            let first = Link::next(self.head);
            let acc = QueueContext::from_link(first).queue;

            let mut cur = Link::next(first);
            while cur != self.head {
                let ctx = QueueContext::from_link(cur);

                let mut merged = Link::new();
                let merged = NonNull::from(&mut merged);
                Link::init(merged);
                merge_rings(merged, acc, ctx.queue, descending);
                Link::splice_tail(merged, acc);

                ctx.size = 0;
                cur = Link::next(cur);
            }

            let size = ring_len(acc);
            QueueContext::from_link(first).size = size;
            size
        }
    }
}

impl Default for QueueChain<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for QueueChain<'_> {
    fn drop(&mut self) {
        unsafe {
            let mut cur = Link::next(self.head);
            while cur != self.head {
                let next = Link::next(cur);
                drop(Box::from_raw(cur.cast::<QueueContext>().as_ptr()));
                cur = next;
            }
            drop(Box::from_raw(self.head.as_ptr()));
        }
    }
}
