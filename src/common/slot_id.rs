//! Frame slot identifier type.

use std::fmt;

/// Identifies a physical frame slot in a [`FrameSet`](crate::FrameSet).
///
/// Slots are positions in the frame buffer, so `usize` lets us index
/// directly: `slots[slot_id.0]`.
///
/// # Example
/// ```
/// use pagesim::SlotId;
///
/// let slot = SlotId::new(2);
/// assert_eq!(slot.0, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

impl SlotId {
    /// Create a new SlotId.
    #[inline]
    pub fn new(id: usize) -> Self {
        SlotId(id)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_equality() {
        assert_eq!(SlotId::new(5), SlotId::new(5));
        assert_ne!(SlotId::new(5), SlotId::new(6));
        assert!(SlotId::new(0) < SlotId::new(1));
    }

    #[test]
    fn test_slot_id_display() {
        assert_eq!(format!("{}", SlotId::new(2)), "Slot(2)");
    }
}
