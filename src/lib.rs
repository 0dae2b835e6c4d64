//! PageSim - a page replacement simulator with interchangeable policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            PageSim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Input Layer (parse)                         │   │
//! │  │        "1,2,3 4" → Vec<PageRef>,  "3" → capacity         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Simulation Engine (simulation/)                    │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     Replacement Policies: FIFO | LRU | Optimal  │   │   │
//! │  │   │          (selected by the Policy tag)            │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │           simulate + FrameSet + StepRecord               │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Results (simulation/)                          │   │
//! │  │      SimulationResult + Replay cursor + RunStats         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageRef, SlotId, Error, config)
//! - [`simulation`] - The engine, frame model, policies, and results
//! - [`parse`] - Turning user text into references and a capacity
//!
//! # Quick Start
//! ```
//! use pagesim::{parse_sequence, simulate, Policy};
//!
//! let seq = parse_sequence("1,2,3,4,1,2,5").unwrap();
//! let result = simulate(Policy::Fifo, &seq, 3).unwrap();
//!
//! assert_eq!(result.fault_label(), "Page Faults: 7");
//! for step in result.history() {
//!     println!("{}", step);
//! }
//! ```

pub mod common;
pub mod parse;
pub mod simulation;

// Re-export commonly used items at crate root for convenience
pub use common::config::{SimulationConfig, DEFAULT_CAPACITY, DEFAULT_POLICY};
pub use common::{Error, PageRef, Result, SlotId};

pub use parse::{parse_capacity, parse_sequence};
pub use simulation::{
    simulate, FrameSet, Policy, Replay, ReplacementPolicy, RunStats, SimulationResult, StepRecord,
};
