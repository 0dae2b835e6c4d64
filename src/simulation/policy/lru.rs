//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use super::ReplacementPolicy;
use crate::common::{PageRef, SlotId};
use crate::simulation::FrameSet;

/// Evicts the resident page whose last reference is oldest.
///
/// Recency is the step index of the last hit or load. Step indices are
/// unique within a run, so ties only arise for pages with no recorded
/// access; those go to the lowest slot.
#[derive(Debug, Default)]
pub struct LruPolicy {
    last_used: HashMap<PageRef, usize>,
}

impl LruPolicy {
    /// Create a new LRU policy.
    pub fn new() -> Self {
        Self::default()
    }

    fn touch(&mut self, page: PageRef, step: usize) {
        self.last_used.insert(page, step);
    }
}

impl ReplacementPolicy for LruPolicy {
    fn record_access(&mut self, page: PageRef, step: usize) {
        self.touch(page, step);
    }

    fn record_insert(&mut self, page: PageRef, step: usize) {
        self.touch(page, step);
    }

    fn record_evict(&mut self, page: PageRef) {
        self.last_used.remove(&page);
    }

    fn victim(&mut self, frames: &FrameSet, _lookahead: &[PageRef]) -> SlotId {
        // min_by_key keeps the first of equal keys, i.e. the lowest slot.
        frames
            .iter()
            .min_by_key(|(_, page)| self.last_used.get(page).map_or(-1, |&s| s as i64))
            .map(|(slot, _)| slot)
            .unwrap_or(SlotId(0))
    }
}
