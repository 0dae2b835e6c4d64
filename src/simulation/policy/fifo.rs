//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use super::{Placement, ReplacementPolicy};
use crate::common::{PageRef, SlotId};
use crate::simulation::FrameSet;

/// Evicts pages in the order they were loaded.
///
/// Hits do not reorder anything. The victim's slot is dropped and the new
/// page appended, so the frame order shown for FIFO is the load queue itself.
#[derive(Debug, Default)]
pub struct FifoPolicy {
    /// Resident pages in load order (front = oldest).
    queue: VecDeque<PageRef>,
}

impl FifoPolicy {
    /// Create a new FIFO policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn placement(&self) -> Placement {
        Placement::Append
    }

    fn record_insert(&mut self, page: PageRef, _step: usize) {
        self.queue.push_back(page);
    }

    fn victim(&mut self, frames: &FrameSet, _lookahead: &[PageRef]) -> SlotId {
        // Every resident page was queued on load, so the front is resident.
        self.queue
            .pop_front()
            .and_then(|oldest| frames.position(oldest))
            .unwrap_or(SlotId(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_frames(ids: &[i64]) -> FrameSet {
        let mut frames = FrameSet::new(ids.len());
        for &id in ids {
            frames.push(PageRef(id));
        }
        frames
    }

    #[test]
    fn test_fifo_basic() {
        let mut policy = FifoPolicy::new();
        for (step, id) in [1, 2, 3].into_iter().enumerate() {
            policy.record_insert(PageRef(id), step);
        }
        let frames = full_frames(&[1, 2, 3]);

        assert_eq!(policy.victim(&frames, &[]), SlotId(0));
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut policy = FifoPolicy::new();
        policy.record_insert(PageRef(1), 0);
        policy.record_insert(PageRef(2), 1);
        policy.record_access(PageRef(1), 2); // should NOT reorder

        let frames = full_frames(&[1, 2]);
        assert_eq!(policy.victim(&frames, &[]), SlotId(0));
    }

    #[test]
    fn test_fifo_follows_load_order_not_slot_order() {
        let mut policy = FifoPolicy::new();
        policy.record_insert(PageRef(5), 0);
        policy.record_insert(PageRef(6), 1);

        // Slot layout deliberately differs from load order.
        let frames = full_frames(&[6, 5]);
        assert_eq!(policy.victim(&frames, &[]), SlotId(1));
    }

    #[test]
    fn test_fifo_appends() {
        assert_eq!(FifoPolicy::new().placement(), Placement::Append);
    }
}
