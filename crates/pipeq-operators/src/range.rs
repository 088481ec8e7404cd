//! Sequence generator.

use pipeq_core::error::{QueryError, Result};

/// `count` consecutive integers starting at `start`.
///
/// Overflow past `i64::MAX` is not checked; values wrap.
pub fn range(start: i64, count: i64) -> Result<Vec<i64>> {
    if count < 0 {
        return Err(QueryError::NegativeParam);
    }
    Ok((0..count).map(|i| start.wrapping_add(i)).collect())
}
