//! Error types for PageSim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in PageSim.
///
/// Every variant is a validation failure raised before a simulation starts.
/// Once a run has begun it cannot fail, so there is no "partial result" case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Frame capacity is not a positive integer.
    ///
    /// Carries the offending value as the user wrote it.
    #[error("Invalid capacity {0:?}: expected a positive integer")]
    InvalidCapacity(String),

    /// A token in the reference string is not an integer.
    ///
    /// `position` is the zero-based index of the token after separators
    /// have been stripped.
    #[error("Invalid page reference {token:?} at position {position}")]
    InvalidInput { token: String, position: usize },

    /// The reference string contains no integers at all.
    #[error("No page references found in input")]
    EmptyInput,

    /// The requested policy is not FIFO, LRU or Optimal.
    #[error("Unsupported policy {0:?}: expected FIFO, LRU or Optimal")]
    UnsupportedPolicy(String),
}

impl Error {
    /// True for the two "reference string is malformed" kinds.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. } | Error::EmptyInput)
    }
}
