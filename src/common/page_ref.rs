//! Page reference type.

use std::fmt;

/// Identifies a logical memory page in a reference string.
///
/// Any `i64` is a valid page number, including zero and negatives. The
/// simulator only compares references for equality, so the value carries no
/// further meaning.
///
/// # Example
/// ```
/// use pagesim::PageRef;
///
/// let page = PageRef::new(42);
/// assert_eq!(page.0, 42);
/// assert_eq!(page.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageRef(pub i64);

impl PageRef {
    /// Create a new PageRef.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageRef(id)
    }

    /// Build a reference string from raw page numbers.
    pub fn sequence<I>(ids: I) -> Vec<PageRef>
    where
        I: IntoIterator<Item = i64>,
    {
        ids.into_iter().map(PageRef).collect()
    }
}

impl From<i64> for PageRef {
    fn from(id: i64) -> Self {
        PageRef(id)
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ref_new() {
        let page = PageRef::new(-7);
        assert_eq!(page.0, -7);
        assert_eq!(PageRef::from(3), PageRef::new(3));
    }

    #[test]
    fn test_page_ref_sequence() {
        let seq = PageRef::sequence([1, 2, 1]);
        assert_eq!(seq, vec![PageRef(1), PageRef(2), PageRef(1)]);
    }

    #[test]
    fn test_page_ref_display() {
        assert_eq!(format!("{}", PageRef::new(42)), "42");
        assert_eq!(format!("{}", PageRef::new(-1)), "-1");
    }
}
