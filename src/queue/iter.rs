use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::ring::Link;

use super::Queue;
use super::element::value_of;

/// An iterator over a queue's payloads in queue order.
///
/// The successor is snapshotted before the current payload is handed
/// out, so the yielded element may be unlinked by the caller without
/// derailing the walk. The queue itself must not be mutated while the
/// iterator is alive; the borrow enforces that.
pub struct Iter<'a> {
    head: NonNull<Link>,
    current: NonNull<Link>,
    _queue: PhantomData<&'a Queue>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(queue: &'a Queue) -> Self {
        let head = queue.sentinel();
        Self {
            head,
            current: unsafe { Link::next(head) },
            _queue: PhantomData,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.head {
            return None;
        }
        let cur = self.current;
        self.current = unsafe { Link::next(cur) };
        Some(unsafe { value_of(cur) })
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
