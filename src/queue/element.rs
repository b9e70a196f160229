use alloc::boxed::Box;
use core::ptr::NonNull;

use crate::ring::Link;

/// A payload carrying node of a queue ring.
///
/// The link is the first field and the struct is `repr(C)`, so a pointer
/// to the embedded link is also a pointer to the element; the queue
/// layer recovers elements from ring nodes with a plain cast. The
/// element exclusively owns its payload; the payload is released first
/// and the node storage after, as a single drop.
#[repr(C)]
pub struct Element {
    link: Link,
    value: Box<str>,
}

impl Element {
    /// Allocates a detached element owning a copy of `text` and returns
    /// its link, ready to be spliced into a ring.
    pub(crate) fn alloc(text: &str) -> NonNull<Link> {
        let el = Box::new(Element {
            link: Link::new(),
            value: Box::from(text),
        });
        NonNull::from(Box::leak(el)).cast()
    }

    /// Takes back ownership of the element embedding `link`.
    ///
    /// # Safety
    ///
    /// `link` must be the link of a live `Element` produced by
    /// [`Element::alloc`], already unlinked from any ring, and never a
    /// queue sentinel.
    pub(crate) unsafe fn reclaim(link: NonNull<Link>) -> Box<Element> {
        unsafe { Box::from_raw(link.cast::<Element>().as_ptr()) }
    }

    /// The owned payload.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Copies the payload into `buf`, truncating to fit, and always
    /// writes a zero terminator inside the buffer. Never writes past
    /// `buf.len()`. Returns the number of payload bytes copied; 0 for an
    /// empty buffer.
    pub fn copy_value(&self, buf: &mut [u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }
        let n = usize::min(self.value.len(), buf.len() - 1);
        buf[..n].copy_from_slice(&self.value.as_bytes()[..n]);
        buf[n] = 0;
        n
    }
}

/// Borrows the payload of the element embedding `link`.
///
/// # Safety
///
/// `link` must be the link of a live `Element`, never a sentinel, and
/// the element must outlive the returned borrow.
pub(crate) unsafe fn value_of<'a>(link: NonNull<Link>) -> &'a str {
    unsafe { &(*link.cast::<Element>().as_ptr()).value }
}
