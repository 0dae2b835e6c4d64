//! Step-by-step navigation over a finished run.

use crate::simulation::{SimulationResult, StepRecord};

/// A cursor over a [`SimulationResult`]'s history.
///
/// Moving the cursor never re-runs the simulation. It starts at step 0 and
/// saturates at both ends.
///
/// # Example
/// ```
/// use pagesim::{simulate, PageRef, Policy};
///
/// let result = simulate(Policy::Lru, &PageRef::sequence([1, 2, 1]), 2).unwrap();
/// let mut replay = result.replay();
/// assert_eq!(replay.label(), "Step: 1 / 3");
/// assert!(replay.next());
/// assert!(replay.next());
/// assert!(!replay.next());
/// assert_eq!(replay.label(), "Step: 3 / 3");
/// ```
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    result: &'a SimulationResult,
    cursor: usize,
}

impl<'a> Replay<'a> {
    pub fn new(result: &'a SimulationResult) -> Self {
        Self { result, cursor: 0 }
    }

    /// Zero-based step under the cursor.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Record under the cursor, `None` for an empty run.
    pub fn current(&self) -> Option<&'a StepRecord> {
        self.result.step(self.cursor)
    }

    /// Advance one step. Returns false if already on the last step.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 < self.result.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step. Returns false if already on the first step.
    pub fn prev(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `step`, clamped to the last step.
    pub fn seek(&mut self, step: usize) {
        self.cursor = step.min(self.result.len().saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Faults up to and including the current step.
    pub fn faults_so_far(&self) -> usize {
        if self.result.is_empty() {
            0
        } else {
            self.result.faults_up_to(self.cursor)
        }
    }

    /// `Step: i / n`, 1-based; `Step: 0 / 0` for an empty run.
    pub fn label(&self) -> String {
        let total = self.result.len();
        let shown = if total == 0 { 0 } else { self.cursor + 1 };
        format!("Step: {} / {}", shown, total)
    }
}

#[cfg(test)]
mod tests {
    use crate::common::PageRef;
    use crate::simulation::{simulate, Policy};

    #[test]
    fn test_replay_walks_forward_and_back() {
        let result = simulate(Policy::Fifo, &PageRef::sequence([1, 2, 1]), 3).unwrap();
        let mut replay = result.replay();

        assert_eq!(replay.position(), 0);
        assert!(!replay.prev());
        assert!(replay.next());
        assert_eq!(replay.current().map(|r| r.page()), Some(PageRef(2)));
        assert!(replay.prev());
        assert_eq!(replay.position(), 0);
    }

    #[test]
    fn test_replay_seek_clamps() {
        let result = simulate(Policy::Fifo, &PageRef::sequence([1, 2, 1]), 3).unwrap();
        let mut replay = result.replay();

        replay.seek(10);
        assert_eq!(replay.position(), 2);
        assert_eq!(replay.faults_so_far(), 2);

        replay.reset();
        assert_eq!(replay.label(), "Step: 1 / 3");
        assert_eq!(replay.faults_so_far(), 1);
    }

    #[test]
    fn test_replay_empty_run() {
        let result = simulate(Policy::Optimal, &[], 3).unwrap();
        let mut replay = result.replay();

        assert!(replay.current().is_none());
        assert!(!replay.next());
        replay.seek(5);
        assert_eq!(replay.position(), 0);
        assert_eq!(replay.label(), "Step: 0 / 0");
        assert_eq!(replay.faults_so_far(), 0);
    }
}
