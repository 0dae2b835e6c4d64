//! Page replacement simulation.
//!
//! Replays a reference string against a fixed number of frames and records
//! the frame contents after every step.
//!
//! # Components
//! - [`simulate`] - The entry point
//! - [`FrameSet`] - Slot-indexed frame buffer
//! - [`policy`] - FIFO, LRU and Optimal replacement policies
//! - [`SimulationResult`] / [`StepRecord`] - Step-indexed history
//! - [`Replay`] - Cursor for stepping through a finished run
//! - [`RunStats`] - Aggregate counters

pub(crate) mod engine;
mod frame_set;
mod history;
pub mod policy;
mod replay;
mod stats;

pub use engine::simulate;
pub use frame_set::FrameSet;
pub use history::{SimulationResult, StepRecord};
pub use policy::{Policy, ReplacementPolicy};
pub use replay::Replay;
pub use stats::RunStats;
