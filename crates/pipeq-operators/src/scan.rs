//! Terminal scans over a materialized payload.
//!
//! Each takes the callable as `Option<F>` and faults with `NilFunc` before
//! touching an element when it is absent. A callable error ends the scan.

use pipeq_core::error::{QueryError, Result};

/// Number of elements satisfying `predicate`. Evaluates every element.
pub fn count_by<T, F>(values: &[T], predicate: Option<F>) -> Result<usize>
where
    F: FnMut(&T) -> Result<bool>,
{
    let mut predicate = predicate.ok_or(QueryError::NilFunc)?;
    let mut count = 0;
    for v in values {
        if predicate(v)? {
            count += 1;
        }
    }
    Ok(count)
}

/// True once any element satisfies `predicate`; stops at the first hit.
pub fn any_with<T, F>(values: &[T], predicate: Option<F>) -> Result<bool>
where
    F: FnMut(&T) -> Result<bool>,
{
    let mut predicate = predicate.ok_or(QueryError::NilFunc)?;
    for v in values {
        if predicate(v)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// True when every element satisfies `predicate`; vacuously true when empty.
///
/// Every element is evaluated even after a false answer, so a later callable
/// error still surfaces.
pub fn all<T, F>(values: &[T], predicate: Option<F>) -> Result<bool>
where
    F: FnMut(&T) -> Result<bool>,
{
    let mut predicate = predicate.ok_or(QueryError::NilFunc)?;
    let mut all = true;
    for v in values {
        all &= predicate(v)?;
    }
    Ok(all)
}

/// Index of the first element satisfying `predicate`.
pub fn position<T, F>(values: &[T], predicate: Option<F>) -> Result<Option<usize>>
where
    F: FnMut(&T) -> Result<bool>,
{
    let mut predicate = predicate.ok_or(QueryError::NilFunc)?;
    for (i, v) in values.iter().enumerate() {
        if predicate(v)? {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// Index of the last element satisfying `predicate`, scanning from the end.
pub fn rposition<T, F>(values: &[T], predicate: Option<F>) -> Result<Option<usize>>
where
    F: FnMut(&T) -> Result<bool>,
{
    let mut predicate = predicate.ok_or(QueryError::NilFunc)?;
    for (i, v) in values.iter().enumerate().rev() {
        if predicate(v)? {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// Length of the longest prefix satisfying `predicate`.
pub fn while_len<T, F>(values: &[T], predicate: Option<F>) -> Result<usize>
where
    F: FnMut(&T) -> Result<bool>,
{
    let mut predicate = predicate.ok_or(QueryError::NilFunc)?;
    let mut n = 0;
    for v in values {
        if !predicate(v)? {
            break;
        }
        n += 1;
    }
    Ok(n)
}
