//! Ordering operators.
//!
//! - `typed`: ascending total orders over a coerced key (ints, uints, floats,
//!   strings). Every element must coerce, checked before sorting.
//! - `comparator`: sort by a caller-supplied "ordered before" relation.

use std::cmp::Ordering;

use pipeq_core::config::QueryConfig;

pub mod comparator;
pub mod typed;

pub use comparator::{then, Less, OrderBy};
pub use typed::{OrderKind, TypedSort};

/// Sort in place honoring `QueryConfig::stable_sort`.
pub(crate) fn sort_values<T, C>(values: &mut [T], cfg: &QueryConfig, cmp: C)
where
    C: FnMut(&T, &T) -> Ordering,
{
    if cfg.stable_sort {
        values.sort_by(cmp);
    } else {
        values.sort_unstable_by(cmp);
    }
}
