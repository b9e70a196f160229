use core::ptr::NonNull;

/// A link in a circular doubly linked ring.
///
/// Both pointers are always valid in a well formed ring; an empty ring's
/// sentinel points at itself in both directions. A `Link` never owns the
/// nodes it points to.
pub struct Link {
    next: NonNull<Link>,
    prev: NonNull<Link>,
}

impl Link {
    /// Creates a link with dangling pointers.
    ///
    /// The link must be initialized with [`Link::init`] (or written by
    /// [`Link::cut`]) before any other ring operation touches it.
    pub const fn new() -> Self {
        Self {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
        }
    }

    /// Makes `ring` an empty ring pointing at itself in both directions.
    ///
    /// # Safety
    ///
    /// `ring` must point at a live `Link` that no other ring still links to.
    #[inline]
    pub unsafe fn init(mut ring: NonNull<Link>) {
        unsafe {
            let r = ring.as_mut();
            r.next = ring;
            r.prev = ring;
        }
    }

    /// # Safety
    ///
    /// `node` must be part of a well formed ring.
    #[inline]
    pub unsafe fn next(node: NonNull<Link>) -> NonNull<Link> {
        unsafe { node.as_ref().next }
    }

    /// # Safety
    ///
    /// `node` must be part of a well formed ring.
    #[inline]
    pub unsafe fn prev(node: NonNull<Link>) -> NonNull<Link> {
        unsafe { node.as_ref().prev }
    }

    /// Returns `true` if the ring holds no node besides its sentinel.
    ///
    /// # Safety
    ///
    /// `ring` must be an initialized sentinel.
    #[inline]
    pub unsafe fn is_empty(ring: NonNull<Link>) -> bool {
        unsafe { ring.as_ref().next == ring }
    }

    /// Returns `true` if the ring holds exactly one node besides its
    /// sentinel.
    ///
    /// # Safety
    ///
    /// `ring` must be an initialized sentinel.
    #[inline]
    pub unsafe fn is_singular(ring: NonNull<Link>) -> bool {
        unsafe {
            let r = ring.as_ref();
            r.next != ring && r.next == r.prev
        }
    }

    /// Splices a detached node between `prev` and `next`. Exactly four
    /// pointer writes.
    #[inline]
    unsafe fn splice(mut node: NonNull<Link>, mut prev: NonNull<Link>, mut next: NonNull<Link>) {
        unsafe {
            node.as_mut().next = next;
            node.as_mut().prev = prev;
            prev.as_mut().next = node;
            next.as_mut().prev = node;
        }
    }

    /// Links a detached node right after `at`.
    ///
    /// # Safety
    ///
    /// `at` must be part of a well formed ring and `node` must not be
    /// linked anywhere.
    #[inline]
    pub unsafe fn insert_after(node: NonNull<Link>, at: NonNull<Link>) {
        unsafe { Self::splice(node, at, at.as_ref().next) }
    }

    /// Links a detached node right before `at`.
    ///
    /// # Safety
    ///
    /// `at` must be part of a well formed ring and `node` must not be
    /// linked anywhere.
    #[inline]
    pub unsafe fn insert_before(node: NonNull<Link>, at: NonNull<Link>) {
        unsafe { Self::splice(node, at.as_ref().prev, at) }
    }

    /// Removes `node` from its ring, restoring its neighbors' mutual
    /// links. The node's own pointers are left stale.
    ///
    /// # Safety
    ///
    /// `node` must be part of a well formed ring and must not be the
    /// sentinel the rest of the ring is reached through.
    #[inline]
    pub unsafe fn unlink(node: NonNull<Link>) {
        unsafe {
            let mut prev = node.as_ref().prev;
            let mut next = node.as_ref().next;
            prev.as_mut().next = next;
            next.as_mut().prev = prev;
        }
    }

    /// Moves every node of `src` to the tail of `dst` and re-initializes
    /// `src` to an empty ring. O(1).
    ///
    /// # Safety
    ///
    /// `src` and `dst` must be distinct, initialized sentinels.
    pub unsafe fn splice_tail(src: NonNull<Link>, mut dst: NonNull<Link>) {
        unsafe {
            if Self::is_empty(src) {
                return;
            }
            let mut first = src.as_ref().next;
            let mut last = src.as_ref().prev;
            let mut tail = dst.as_ref().prev;
            tail.as_mut().next = first;
            first.as_mut().prev = tail;
            last.as_mut().next = dst;
            dst.as_mut().prev = last;
            Self::init(src);
        }
    }

    /// Detaches the initial segment of `src`, up to and including
    /// `boundary`, into `dst`. `dst` is overwritten wholesale; if
    /// `boundary` is `src` itself, `dst` comes out empty. Both resulting
    /// rings are well formed. O(1).
    ///
    /// # Safety
    ///
    /// `src` must be an initialized sentinel and `boundary` a node inside
    /// it (or `src` itself). `dst` must be a live `Link` distinct from
    /// both that no other ring still links to.
    pub unsafe fn cut(mut dst: NonNull<Link>, mut src: NonNull<Link>, mut boundary: NonNull<Link>) {
        unsafe {
            if boundary == src {
                Self::init(dst);
                return;
            }
            let mut first = src.as_ref().next;
            let mut after = boundary.as_ref().next;
            dst.as_mut().next = first;
            first.as_mut().prev = dst;
            dst.as_mut().prev = boundary;
            boundary.as_mut().next = dst;
            src.as_mut().next = after;
            after.as_mut().prev = src;
        }
    }

    /// Reverses node order by swapping every node's pointer pair, then
    /// the sentinel's own pair. O(n), no allocation.
    ///
    /// # Safety
    ///
    /// `ring` must be an initialized sentinel.
    pub unsafe fn reverse(mut ring: NonNull<Link>) {
        unsafe {
            let mut cur = ring.as_ref().next;
            while cur != ring {
                let mut node = cur;
                let next = node.as_ref().next;
                let n = node.as_mut();
                core::mem::swap(&mut n.next, &mut n.prev);
                cur = next;
            }
            let r = ring.as_mut();
            core::mem::swap(&mut r.next, &mut r.prev);
        }
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new()
    }
}
