//! Set algebra: distinct, union, intersect, except.
//!
//! All hash-backed operators dedupe by `Eq + Hash` and yield each value at
//! most once. Output order follows `QueryConfig::set_order`; with the default
//! `SetOrder::Hashed` it is unspecified.

use std::collections::HashSet;
use std::hash::Hash;

use pipeq_core::config::SetOrder;

pub mod combine;
pub mod distinct;

pub use combine::{Except, Intersect, Union};
pub use distinct::{Distinct, DistinctBy};

/// Collect the unique values of `items`.
pub(crate) fn collect_unique<T, I>(items: I, order: SetOrder) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    match order {
        SetOrder::Hashed => items
            .into_iter()
            .collect::<HashSet<T>>()
            .into_iter()
            .collect(),
        SetOrder::FirstSeen => {
            let mut seen = HashSet::new();
            items
                .into_iter()
                .filter(|v| seen.insert(v.clone()))
                .collect()
        }
    }
}
