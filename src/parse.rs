//! Parsing user-supplied text into simulation inputs.
//!
//! Reference strings are integers separated by commas, whitespace, or both
//! (`"1,2,3"`, `"1 2 3"`, `"1, 2,  3"`). Empty tokens from repeated
//! separators are skipped.

use crate::common::{Error, PageRef, Result};

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Parse a reference string.
///
/// # Errors
/// - [`Error::InvalidInput`] for the first token that is not an integer.
/// - [`Error::EmptyInput`] if the text holds no tokens at all.
///
/// # Example
/// ```
/// use pagesim::{parse_sequence, PageRef};
///
/// let seq = parse_sequence("7, 0 1,2").unwrap();
/// assert_eq!(seq, PageRef::sequence([7, 0, 1, 2]));
/// assert!(parse_sequence("1,two").is_err());
/// ```
pub fn parse_sequence(text: &str) -> Result<Vec<PageRef>> {
    let sequence = text
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map(PageRef).map_err(|_| Error::InvalidInput {
                token: token.to_string(),
                position,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if sequence.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(sequence)
}

/// Parse a frame count, which must be a positive integer.
///
/// # Errors
/// [`Error::InvalidCapacity`] carrying the trimmed text.
pub fn parse_capacity(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::InvalidCapacity(trimmed.to_string())),
    }
}
