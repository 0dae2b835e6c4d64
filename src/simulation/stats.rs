//! Run statistics.

use std::fmt;

/// Aggregate counters for one simulation run.
///
/// Computed from a [`SimulationResult`](crate::SimulationResult) via
/// [`stats()`](crate::SimulationResult::stats). Plain values, so it can be
/// compared, printed, and copied freely.
///
/// # Example
/// ```
/// use pagesim::{simulate, PageRef, Policy};
///
/// let seq = PageRef::sequence([1, 2, 1, 3]);
/// let stats = simulate(Policy::Fifo, &seq, 2).unwrap().stats();
/// assert_eq!(stats.faults, 3);
/// assert_eq!(stats.hits(), 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// Length of the reference string.
    pub references: u64,

    /// Steps where the page was not resident.
    pub faults: u64,

    /// Faults that had to replace a resident page.
    pub evictions: u64,
}

impl RunStats {
    /// Steps where the page was already resident.
    pub fn hits(&self) -> u64 {
        self.references - self.faults
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits() as f64 / self.references as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, faults: {}, hits: {}, evictions: {}, fault_rate: {:.2}% }}",
            self.references,
            self.faults,
            self.hits(),
            self.evictions,
            self.fault_rate() * 100.0
        )
    }
}
