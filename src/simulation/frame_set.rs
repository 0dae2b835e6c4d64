//! FrameSet - the physical frames of a simulation.
//!
//! A [`FrameSet`] is an ordered buffer of at most `capacity` slots. Slots are
//! addressed by [`SlotId`], never by the page they hold, so replacing a page
//! keeps every other slot where it was.

use crate::common::{PageRef, SlotId};

/// The resident pages of a run, in slot order.
///
/// Slots fill from the front. Once `len() == capacity()` the set stays full:
/// a fault then either overwrites a slot in place ([`FrameSet::replace`]) or
/// removes one and appends the new page ([`FrameSet::rotate`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    slots: Vec<PageRef>,
    capacity: usize,
}

impl FrameSet {
    /// Create an empty frame set with room for `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Maximum number of resident pages.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no page has been loaded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Is `page` resident? Slot order is irrelevant here.
    #[inline]
    pub fn contains(&self, page: PageRef) -> bool {
        self.slots.contains(&page)
    }

    /// Slot currently holding `page`, if resident.
    pub fn position(&self, page: PageRef) -> Option<SlotId> {
        self.slots.iter().position(|&p| p == page).map(SlotId)
    }

    /// Page held in `slot`, if occupied.
    pub fn get(&self, slot: SlotId) -> Option<PageRef> {
        self.slots.get(slot.0).copied()
    }

    /// Resident pages in slot order.
    #[inline]
    pub fn as_slice(&self) -> &[PageRef] {
        &self.slots
    }

    /// Iterate `(slot, page)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, PageRef)> + '_ {
        self.slots.iter().enumerate().map(|(i, &p)| (SlotId(i), p))
    }

    /// Owned copy of the slot contents for a history record.
    pub fn snapshot(&self) -> Vec<PageRef> {
        self.slots.clone()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Load `page` into the next free slot and return that slot.
    ///
    /// # Panics
    /// Panics if the set is already full.
    pub fn push(&mut self, page: PageRef) -> SlotId {
        assert!(!self.is_full(), "push into a full frame set");
        self.slots.push(page);
        SlotId(self.slots.len() - 1)
    }

    /// Overwrite `slot` with `page`, returning the evicted page.
    ///
    /// # Panics
    /// Panics if `slot` is not occupied.
    pub fn replace(&mut self, slot: SlotId, page: PageRef) -> PageRef {
        std::mem::replace(&mut self.slots[slot.0], page)
    }

    /// Remove the page in `slot`, shift later slots down, and append `page`.
    ///
    /// Returns the evicted page and the slot `page` landed in (always the
    /// last one).
    ///
    /// # Panics
    /// Panics if `slot` is not occupied.
    pub fn rotate(&mut self, slot: SlotId, page: PageRef) -> (PageRef, SlotId) {
        let evicted = self.slots.remove(slot.0);
        self.slots.push(page);
        (evicted, SlotId(self.slots.len() - 1))
    }
}
