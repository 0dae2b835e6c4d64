//! Common types and utilities shared across PageSim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration defaults and [`SimulationConfig`](config::SimulationConfig)
//! - Error types
//! - Identifiers (PageRef, SlotId)

pub mod config;
pub mod error;
mod page_ref;
mod slot_id;

pub use error::{Error, Result};
pub use page_ref::PageRef;
pub use slot_id::SlotId;
