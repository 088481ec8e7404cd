//! Filter operator (`where`).

use pipeq_core::config::QueryConfig;
use pipeq_core::error::{QueryError, Result};

use crate::traits::Operator;

/// Keeps the elements a predicate accepts, in source order.
///
/// Every element is evaluated; the first predicate error aborts the stage.
pub struct Filter<F> {
    pub predicate: Option<F>,
}

impl<F> Filter<F> {
    pub fn new(predicate: F) -> Self {
        Self {
            predicate: Some(predicate),
        }
    }
}

impl<F> Default for Filter<F> {
    fn default() -> Self {
        Self { predicate: None }
    }
}

impl<T, F> Operator<T> for Filter<F>
where
    F: FnMut(&T) -> Result<bool>,
{
    type Output = T;

    fn name(&self) -> &'static str {
        "filter"
    }

    fn eval(&mut self, input: Vec<T>, _cfg: &QueryConfig) -> Result<Vec<T>> {
        let predicate = self.predicate.as_mut().ok_or(QueryError::NilFunc)?;

        let mut kept = Vec::new();
        for v in input {
            if predicate(&v)? {
                kept.push(v);
            }
        }
        Ok(kept)
    }
}
