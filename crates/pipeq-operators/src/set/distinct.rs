//! Deduplication by natural equality or by a caller-supplied equivalence.

use std::hash::Hash;

use pipeq_core::config::QueryConfig;
use pipeq_core::error::{QueryError, Result};

use crate::traits::Operator;

use super::collect_unique;

/// Hash-based dedupe. O(n); order per `QueryConfig::set_order`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Distinct;

impl<T> Operator<T> for Distinct
where
    T: Eq + Hash + Clone,
{
    type Output = T;

    fn name(&self) -> &'static str {
        "distinct"
    }

    fn eval(&mut self, input: Vec<T>, cfg: &QueryConfig) -> Result<Vec<T>> {
        Ok(collect_unique(input, cfg.set_order))
    }
}

/// Pairwise dedupe under an equivalence predicate.
///
/// For each index `i` not yet excluded, every later index `j` is compared with
/// it; a match excludes `j`. The earliest element of each equivalence class is
/// kept and first-occurrence order is preserved.
///
/// There is no hash for an arbitrary predicate, so this is O(n²) when all
/// elements differ (O(n) when they are all equivalent). Prefer [`Distinct`]
/// whenever natural equality is enough.
pub struct DistinctBy<F> {
    pub equivalence: Option<F>,
}

impl<F> DistinctBy<F> {
    pub fn new(equivalence: F) -> Self {
        Self {
            equivalence: Some(equivalence),
        }
    }
}

impl<F> Default for DistinctBy<F> {
    fn default() -> Self {
        Self { equivalence: None }
    }
}

impl<T, F> Operator<T> for DistinctBy<F>
where
    F: FnMut(&T, &T) -> Result<bool>,
{
    type Output = T;

    fn name(&self) -> &'static str {
        "distinct_by"
    }

    fn eval(&mut self, input: Vec<T>, _cfg: &QueryConfig) -> Result<Vec<T>> {
        let equivalent = self.equivalence.as_mut().ok_or(QueryError::NilFunc)?;

        let len = input.len();
        let mut excluded = vec![false; len];
        #[cfg(feature = "tracing")]
        let mut comparisons = 0usize;

        for i in 0..len {
            if excluded[i] {
                continue;
            }
            for j in (i + 1)..len {
                #[cfg(feature = "tracing")]
                {
                    comparisons += 1;
                }
                if equivalent(&input[i], &input[j])? {
                    excluded[j] = true;
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(rows = len, comparisons, "distinct_by compared pairs");

        Ok(input
            .into_iter()
            .zip(excluded)
            .filter_map(|(v, dropped)| (!dropped).then_some(v))
            .collect())
    }
}
