//! The simulation engine: replays a reference string against a policy.

use log::{debug, trace};

use crate::common::{Error, PageRef, Result};
use crate::simulation::policy::{
    FifoPolicy, LruPolicy, OptimalPolicy, Placement, ReplacementPolicy,
};
use crate::simulation::{FrameSet, Policy, SimulationResult, StepRecord};

/// Replay `sequence` against `policy` with `capacity` frames.
///
/// Returns one [`StepRecord`] per reference. An empty `sequence` is valid and
/// yields an empty history.
///
/// # Errors
/// [`Error::InvalidCapacity`] if `capacity` is zero. Nothing is simulated in
/// that case.
///
/// # Example
/// ```
/// use pagesim::{simulate, PageRef, Policy};
///
/// let seq = PageRef::sequence([1, 2, 3, 1, 2, 4]);
/// let result = simulate(Policy::Lru, &seq, 3).unwrap();
///
/// assert_eq!(result.fault_count(), 4);
/// assert_eq!(result.fault_step_indices(), &[0, 1, 2, 5]);
/// ```
pub fn simulate(policy: Policy, sequence: &[PageRef], capacity: usize) -> Result<SimulationResult> {
    if capacity == 0 {
        return Err(Error::InvalidCapacity(capacity.to_string()));
    }
    Ok(run(policy, sequence, capacity))
}

/// Replay with an already validated, non-zero capacity.
pub(crate) fn run(policy: Policy, sequence: &[PageRef], capacity: usize) -> SimulationResult {
    let history = match policy {
        Policy::Fifo => replay(FifoPolicy::new(), sequence, capacity),
        Policy::Lru => replay(LruPolicy::new(), sequence, capacity),
        Policy::Optimal => replay(OptimalPolicy::new(), sequence, capacity),
    };
    let result = SimulationResult::new(policy, capacity, history);

    debug!(
        "{} run over {} references with {} frames: {} faults",
        policy,
        sequence.len(),
        capacity,
        result.fault_count()
    );
    result
}

/// Drive `replacer` over `sequence`, starting from empty frames.
///
/// Generic so each policy is monomorphized; the state lives on this stack
/// frame and is dropped when the run ends.
fn replay<P: ReplacementPolicy>(
    mut replacer: P,
    sequence: &[PageRef],
    capacity: usize,
) -> Vec<StepRecord> {
    let mut frames = FrameSet::new(capacity);
    let mut history = Vec::with_capacity(sequence.len());

    for (step, &page) in sequence.iter().enumerate() {
        if frames.contains(page) {
            replacer.record_access(page, step);
            history.push(StepRecord::new(step, page, frames.snapshot(), false, None));
            continue;
        }

        let evicted = if frames.is_full() {
            let victim = replacer.victim(&frames, &sequence[step + 1..]);
            let evicted = match replacer.placement() {
                Placement::InPlace => frames.replace(victim, page),
                Placement::Append => frames.rotate(victim, page).0,
            };
            replacer.record_evict(evicted);
            trace!("step {}: page {} evicts {} from {}", step, page, evicted, victim);
            Some(evicted)
        } else {
            frames.push(page);
            None
        };

        replacer.record_insert(page, step);
        history.push(StepRecord::new(step, page, frames.snapshot(), true, evicted));
    }

    history
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(ids: &[i64]) -> Vec<PageRef> {
        PageRef::sequence(ids.iter().copied())
    }

    fn frames_of(result: &SimulationResult) -> Vec<Vec<i64>> {
        result
            .history()
            .iter()
            .map(|r| r.frames().iter().map(|p| p.0).collect())
            .collect()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        for policy in Policy::ALL {
            assert_eq!(
                simulate(policy, &seq(&[1, 2]), 0),
                Err(Error::InvalidCapacity("0".to_string()))
            );
        }
    }

    #[test]
    fn test_empty_sequence() {
        for policy in Policy::ALL {
            let result = simulate(policy, &[], 3).unwrap();
            assert!(result.is_empty());
            assert_eq!(result.fault_count(), 0);
            assert!(result.fault_step_indices().is_empty());
        }
    }

    #[test]
    fn test_fifo_trace() {
        let result = simulate(Policy::Fifo, &seq(&[1, 2, 3, 4, 1, 2, 5]), 3).unwrap();

        assert_eq!(result.fault_count(), 7);
        assert_eq!(result.fault_step_indices(), &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(
            frames_of(&result),
            vec![
                vec![1],
                vec![1, 2],
                vec![1, 2, 3],
                vec![2, 3, 4],
                vec![3, 4, 1],
                vec![4, 1, 2],
                vec![1, 2, 5],
            ]
        );
        assert_eq!(result.step(3).and_then(|r| r.evicted()), Some(PageRef(1)));
    }

    #[test]
    fn test_lru_trace() {
        let result = simulate(Policy::Lru, &seq(&[1, 2, 3, 1, 2, 4]), 3).unwrap();

        assert_eq!(result.fault_step_indices(), &[0, 1, 2, 5]);
        assert_eq!(result.final_frames(), seq(&[1, 2, 4]).as_slice());
        assert_eq!(result.step(5).and_then(|r| r.evicted()), Some(PageRef(3)));
    }

    #[test]
    fn test_lru_replaces_in_place() {
        let result = simulate(Policy::Lru, &seq(&[1, 2, 3, 4, 1, 2, 5]), 3).unwrap();
        assert_eq!(
            frames_of(&result)[3..].to_vec(),
            vec![vec![4, 2, 3], vec![4, 1, 3], vec![4, 1, 2], vec![5, 1, 2]]
        );
    }

    #[test]
    fn test_optimal_trace() {
        let result = simulate(Policy::Optimal, &seq(&[1, 2, 3, 4, 1, 2, 5]), 3).unwrap();

        assert_eq!(result.fault_step_indices(), &[0, 1, 2, 3, 6]);
        // Step 3: 3 never recurs. Step 6: nothing recurs, first slot goes.
        assert_eq!(frames_of(&result)[3], vec![1, 2, 4]);
        assert_eq!(result.final_frames(), seq(&[5, 2, 4]).as_slice());
    }

    #[test]
    fn test_capacity_one_overwrites() {
        for policy in Policy::ALL {
            let result = simulate(policy, &seq(&[5, 6, 5, 5, 7]), 1).unwrap();
            assert_eq!(result.fault_step_indices(), &[0, 1, 2, 4]);
            assert_eq!(
                frames_of(&result),
                vec![vec![5], vec![6], vec![5], vec![5], vec![7]]
            );
        }
    }

    #[test]
    fn test_hit_keeps_snapshot() {
        let result = simulate(Policy::Optimal, &seq(&[1, 2, 1]), 2).unwrap();
        let hit = result.step(2).unwrap();
        assert!(hit.is_hit());
        assert_eq!(hit.evicted(), None);
        assert_eq!(hit.frames(), result.step(1).unwrap().frames());
    }
}
