//! Optimal (Belady's MIN) replacement policy.

use super::ReplacementPolicy;
use crate::common::{PageRef, SlotId};
use crate::simulation::FrameSet;

/// Evicts the resident page whose next reference is farthest in the future.
///
/// A page that is never referenced again counts as infinitely far. Among
/// several such pages the lowest slot wins.
///
/// Each decision rescans `lookahead`, so a run costs O(n²) in the worst case.
#[derive(Debug, Default)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    /// Create a new Optimal policy.
    pub fn new() -> Self {
        OptimalPolicy
    }
}

/// Distance to the next use of `page`, `None` if it never recurs.
fn next_use(page: PageRef, lookahead: &[PageRef]) -> Option<usize> {
    lookahead.iter().position(|&p| p == page)
}

impl ReplacementPolicy for OptimalPolicy {
    fn record_insert(&mut self, _page: PageRef, _step: usize) {}

    fn victim(&mut self, frames: &FrameSet, lookahead: &[PageRef]) -> SlotId {
        let mut best = SlotId(0);
        let mut best_distance = 0;

        for (slot, page) in frames.iter() {
            let distance = match next_use(page, lookahead) {
                Some(d) => d,
                None => return slot,
            };
            // Strictly greater: ties keep the earlier slot.
            if slot == SlotId(0) || distance > best_distance {
                best = slot;
                best_distance = distance;
            }
        }
        best
    }
}
