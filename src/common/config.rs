//! Configuration for a simulation run.

use crate::common::{Error, PageRef, Result};
use crate::simulation::{engine, Policy, SimulationResult};

/// Number of physical frames used when none is given.
///
/// Three frames is the classic textbook setup and what most reference
/// strings in exercises are designed around.
pub const DEFAULT_CAPACITY: usize = 3;

/// Policy used when none is given.
pub const DEFAULT_POLICY: Policy = Policy::Fifo;

/// A validated policy + capacity pair.
///
/// Holding one of these means the capacity has already been checked, so
/// [`SimulationConfig::run`] cannot fail.
///
/// # Example
/// ```
/// use pagesim::{PageRef, Policy, SimulationConfig};
///
/// let config = SimulationConfig::new(Policy::Lru, 2).unwrap();
/// let result = config.run(&PageRef::sequence([1, 2, 1, 3]));
/// assert_eq!(result.fault_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    policy: Policy,
    capacity: usize,
}

impl SimulationConfig {
    /// Create a config, rejecting a zero capacity.
    pub fn new(policy: Policy, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity.to_string()));
        }
        Ok(Self { policy, capacity })
    }

    /// The replacement policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The number of physical frames.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Same capacity, different policy.
    pub fn with_policy(self, policy: Policy) -> Self {
        Self { policy, ..self }
    }

    /// Replay `sequence` under this configuration.
    pub fn run(&self, sequence: &[PageRef]) -> SimulationResult {
        engine::run(self.policy, sequence, self.capacity)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            policy: DEFAULT_POLICY,
            capacity: DEFAULT_CAPACITY,
        }
    }
}
