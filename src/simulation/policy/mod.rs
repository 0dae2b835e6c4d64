//! Page replacement policies.
//!
//! Currently implements:
//! - [`FifoPolicy`] - evict the longest-resident page
//! - [`LruPolicy`] - evict the least recently referenced page
//! - [`OptimalPolicy`] - evict the page whose next use is farthest away
//!
//! Every policy implements [`ReplacementPolicy`]. Callers pick one through the
//! [`Policy`] tag rather than constructing them directly.

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageRef, SlotId};
use crate::simulation::FrameSet;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

/// Where the incoming page goes once a victim has been chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Overwrite the victim's slot; other slots stay put.
    InPlace,
    /// Drop the victim's slot and append the incoming page at the end, so
    /// slot order mirrors load order.
    Append,
}

/// Bookkeeping and victim selection for one replacement strategy.
///
/// The engine owns the [`FrameSet`] and drives the policy through these
/// hooks. A policy only ever sees the frames read-only.
pub trait ReplacementPolicy {
    /// How the engine places a page after evicting a victim.
    fn placement(&self) -> Placement {
        Placement::InPlace
    }

    /// A resident page was referenced at `step` (a hit).
    fn record_access(&mut self, _page: PageRef, _step: usize) {}

    /// `page` was loaded into the frames at `step` (a fault).
    fn record_insert(&mut self, page: PageRef, step: usize);

    /// `page` has just been evicted.
    fn record_evict(&mut self, _page: PageRef) {}

    /// Choose the slot to evict.
    ///
    /// Only called when `frames` is full. `lookahead` holds the references
    /// after the current step, in order.
    fn victim(&mut self, frames: &FrameSet, lookahead: &[PageRef]) -> SlotId;
}

/// Tag selecting one of the supported replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    /// All supported policies, in display order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Human-readable name (`FIFO`, `LRU`, `Optimal`).
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Case-insensitive; `opt` and `min` are accepted for Optimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" | "min" => Ok(Policy::Optimal),
            _ => Err(Error::UnsupportedPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("FIFO".parse::<Policy>(), Ok(Policy::Fifo));
        assert_eq!("lru".parse::<Policy>(), Ok(Policy::Lru));
        assert_eq!(" Optimal ".parse::<Policy>(), Ok(Policy::Optimal));
        assert_eq!("opt".parse::<Policy>(), Ok(Policy::Optimal));
    }

    #[test]
    fn test_policy_from_str_unsupported() {
        assert_eq!(
            "clock".parse::<Policy>(),
            Err(Error::UnsupportedPolicy("clock".to_string()))
        );
        assert!("".parse::<Policy>().is_err());
    }

    #[test]
    fn test_policy_display_roundtrips() {
        for policy in Policy::ALL {
            assert_eq!(policy.to_string().parse::<Policy>(), Ok(policy));
        }
        assert_eq!(Policy::Optimal.to_string(), "Optimal");
    }
}
