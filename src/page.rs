//! Page table record: the per-minimum-block metadata entry tracked by the
//! allocator core.

use bitflags::bitflags;
use core::ptr::NonNull;

use crate::list::ListNode;

bitflags! {
    /// State bits for a page record.
    ///
    /// The `order` field alone cannot tell a free block from an allocated
    /// one of the same order, so a single bit of extra state rides along
    /// with it — this is what lets [`crate::Allocator::free`] test "is my
    /// buddy free" in O(1) by reading the buddy's own record, instead of
    /// scanning the free list for its address.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PageState: u8 {
        /// Page is the head of a currently-free block.
        const FREE = 1 << 0;
        /// Page is the head of a currently-allocated block.
        const ALLOCATED = 1 << 1;
    }
}

/// A descriptor for a single minimum-order block ("page").
///
/// Exactly one `Page` exists per page in the arena, held in a fixed slice
/// handed to [`crate::Allocator::init`]. Only the record at a block's head
/// index carries meaningful state; records covered by a larger block are
/// left untouched until that block is split again.
#[repr(C)]
pub struct Page {
    /// This record's own position in the page table. Redundant with the
    /// record's index in the backing slice, carried for O(1) address<->index
    /// round-trips while walking a free list.
    pub(crate) index: usize,
    /// `Some(o)` if this page is the head of a block (free or allocated) of
    /// order `o`. `None` ("UNSET") if it is not the head of any
    /// currently-tracked block.
    pub(crate) order: Option<u8>,
    state: PageState,
    next: Option<NonNull<Page>>,
    prev: Option<NonNull<Page>>,
}

impl Page {
    /// Create a new, untracked page record for table index `index`.
    pub const fn new(index: usize) -> Self {
        Self { index, order: None, state: PageState::empty(), next: None, prev: None }
    }

    /// Reset a record back to its untracked state. Used before a record is
    /// inserted into a free list, so stale links never leak across
    /// split/coalesce boundaries.
    pub(crate) fn reset(&mut self, index: usize) {
        self.index = index;
        self.order = None;
        self.state = PageState::empty();
        self.next = None;
        self.prev = None;
    }

    /// Mark this record as the free head of a block of order `order`.
    pub(crate) fn mark_free(&mut self, order: u8) {
        self.order = Some(order);
        self.state = PageState::FREE;
    }

    /// Mark this record as the allocated head of a block of order `order`.
    pub(crate) fn mark_allocated(&mut self, order: u8) {
        self.order = Some(order);
        self.state = PageState::ALLOCATED;
    }

    /// `true` if this record is the head of a currently-free block.
    pub(crate) fn is_free(&self) -> bool {
        self.state.contains(PageState::FREE)
    }
}

// SAFETY: `Page` is a plain descriptor; all access is serialized by the
// single-threaded contract the allocator documents (see the crate's
// concurrency notes) rather than by any internal synchronization here.
unsafe impl Send for Page {}
unsafe impl Sync for Page {}

impl ListNode for Page {
    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn prev(&self) -> Option<NonNull<Self>> {
        self.prev
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<NonNull<Self>>) {
        self.prev = prev;
    }
}
