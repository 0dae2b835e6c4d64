//! Step records and the result of a simulation run.

use std::fmt;

use crate::common::PageRef;
use crate::simulation::{Policy, Replay, RunStats};

/// What happened at one step of a run.
///
/// Records are produced by the engine and never change afterwards; every
/// field is exposed read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    step: usize,
    page: PageRef,
    frames: Vec<PageRef>,
    is_fault: bool,
    evicted: Option<PageRef>,
}

impl StepRecord {
    pub(crate) fn new(
        step: usize,
        page: PageRef,
        frames: Vec<PageRef>,
        is_fault: bool,
        evicted: Option<PageRef>,
    ) -> Self {
        Self {
            step,
            page,
            frames,
            is_fault,
            evicted,
        }
    }

    /// Zero-based position in the reference string.
    #[inline]
    pub fn step_index(&self) -> usize {
        self.step
    }

    /// The page referenced at this step.
    #[inline]
    pub fn page(&self) -> PageRef {
        self.page
    }

    /// Frame contents after this step, in slot order.
    #[inline]
    pub fn frames(&self) -> &[PageRef] {
        &self.frames
    }

    /// True if the page was not resident before this step.
    #[inline]
    pub fn is_fault(&self) -> bool {
        self.is_fault
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        !self.is_fault
    }

    /// Page that was replaced at this step, if any.
    #[inline]
    pub fn evicted(&self) -> Option<PageRef> {
        self.evicted
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}: page {} -> [", self.step + 1, self.page)?;
        for (i, page) in self.frames.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page)?;
        }
        write!(f, "]")?;
        match (self.is_fault, self.evicted) {
            (true, Some(victim)) => write!(f, " fault (evicted {})", victim),
            (true, None) => write!(f, " fault"),
            (false, _) => write!(f, " hit"),
        }
    }
}

/// Full outcome of replaying a reference string under one policy.
///
/// Holds one [`StepRecord`] per reference. The result is owned by the caller
/// and shares nothing with other runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    policy: Policy,
    capacity: usize,
    history: Vec<StepRecord>,
    fault_steps: Vec<usize>,
}

impl SimulationResult {
    pub(crate) fn new(policy: Policy, capacity: usize, history: Vec<StepRecord>) -> Self {
        let fault_steps = history
            .iter()
            .filter(|r| r.is_fault())
            .map(|r| r.step_index())
            .collect();
        Self {
            policy,
            capacity,
            history,
            fault_steps,
        }
    }

    /// Policy that produced this run.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of frames the run used.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// One record per reference, in order.
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    /// Record for step `index`, if in range.
    pub fn step(&self, index: usize) -> Option<&StepRecord> {
        self.history.get(index)
    }

    /// Number of steps (equal to the reference string length).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Total page faults.
    pub fn fault_count(&self) -> usize {
        self.fault_steps.len()
    }

    /// Indices of faulting steps, ascending and without duplicates.
    pub fn fault_step_indices(&self) -> &[usize] {
        &self.fault_steps
    }

    /// Did step `index` fault?
    pub fn is_fault_step(&self, index: usize) -> bool {
        self.fault_steps.binary_search(&index).is_ok()
    }

    /// Faults in steps `0..=step`, the running total shown while replaying.
    pub fn faults_up_to(&self, step: usize) -> usize {
        self.fault_steps.partition_point(|&s| s <= step)
    }

    /// Frame contents after the last step. Empty for an empty run.
    pub fn final_frames(&self) -> &[PageRef] {
        self.history.last().map(|r| r.frames()).unwrap_or(&[])
    }

    /// `Page Faults: N` summary line.
    pub fn fault_label(&self) -> String {
        format!("Page Faults: {}", self.fault_count())
    }

    /// Aggregate counters for the run.
    pub fn stats(&self) -> RunStats {
        RunStats {
            references: self.history.len() as u64,
            faults: self.fault_count() as u64,
            evictions: self.history.iter().filter(|r| r.evicted().is_some()).count() as u64,
        }
    }

    /// A cursor for stepping back and forth through the history.
    pub fn replay(&self) -> Replay<'_> {
        Replay::new(self)
    }
}
