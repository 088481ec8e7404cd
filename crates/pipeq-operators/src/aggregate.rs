//! Numeric aggregates and typed min/max.
//!
//! `sum`/`average` accept any element with a numeric view (`Coerce::to_number`)
//! and widen through the `Number` conversion table to `f64`. Min/max are kind
//! specific: an element without the requested view faults with `TypeMismatch`.

use pipeq_core::coerce::Coerce;
use pipeq_core::error::{QueryError, Result};

pub fn sum<T: Coerce>(values: &[T]) -> Result<f64> {
    let mut sum = 0.0;
    for v in values {
        let n = v.to_number().ok_or(QueryError::NonNumeric)?;
        sum += n.to_f64();
    }
    Ok(sum)
}

pub fn average<T: Coerce>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(QueryError::EmptySequence);
    }
    Ok(sum(values)? / values.len() as f64)
}

/// Both extremes of a sequence, found in one pass.
///
/// Ties keep the earliest index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax<V> {
    pub min: V,
    pub max: V,
    pub min_index: usize,
    pub max_index: usize,
}

/// Scan once, tracking minimum and maximum of `view(element)` together.
pub fn min_max_by<T, V, F>(values: &[T], view: F) -> Result<MinMax<V>>
where
    V: PartialOrd + Copy,
    F: Fn(&T) -> Option<V>,
{
    let (first, rest) = values.split_first().ok_or(QueryError::EmptySequence)?;
    let seed = view(first).ok_or(QueryError::TypeMismatch)?;
    let mut acc = MinMax {
        min: seed,
        max: seed,
        min_index: 0,
        max_index: 0,
    };

    for (offset, v) in rest.iter().enumerate() {
        let x = view(v).ok_or(QueryError::TypeMismatch)?;
        if x < acc.min {
            acc.min = x;
            acc.min_index = offset + 1;
        }
        if x > acc.max {
            acc.max = x;
            acc.max_index = offset + 1;
        }
    }
    Ok(acc)
}

pub fn min_max_ints<T: Coerce>(values: &[T]) -> Result<MinMax<i64>> {
    min_max_by(values, T::as_int)
}

pub fn min_max_uints<T: Coerce>(values: &[T]) -> Result<MinMax<u64>> {
    min_max_by(values, T::as_uint)
}

pub fn min_max_floats<T: Coerce>(values: &[T]) -> Result<MinMax<f64>> {
    min_max_by(values, T::as_float)
}
