//! Inner join by key equality.

use std::hash::Hash;
use std::marker::PhantomData;

use pipeq_core::config::QueryConfig;
use pipeq_core::error::{QueryError, Result};

use crate::traits::Operator;

use super::KeyMemo;

/// Emits `result(outer, inner)` for every pair whose keys are equal, in outer
/// order then inner order.
pub struct Join<I, K, U, OK, IK, R> {
    pub inner: Option<Vec<I>>,
    pub outer_key: Option<OK>,
    pub inner_key: Option<IK>,
    pub result: Option<R>,
    _types: PhantomData<fn() -> (K, U)>,
}

impl<I, K, U, OK, IK, R> Join<I, K, U, OK, IK, R> {
    pub fn new(inner: Vec<I>, outer_key: OK, inner_key: IK, result: R) -> Self {
        Self {
            inner: Some(inner),
            outer_key: Some(outer_key),
            inner_key: Some(inner_key),
            result: Some(result),
            _types: PhantomData,
        }
    }
}

impl<I, K, U, OK, IK, R> Default for Join<I, K, U, OK, IK, R> {
    fn default() -> Self {
        Self {
            inner: None,
            outer_key: None,
            inner_key: None,
            result: None,
            _types: PhantomData,
        }
    }
}

impl<T, I, K, U, OK, IK, R> Operator<T> for Join<I, K, U, OK, IK, R>
where
    I: Eq + Hash + Clone,
    K: PartialEq,
    OK: FnMut(&T) -> K,
    IK: FnMut(&I) -> K,
    R: FnMut(&T, &I) -> U,
{
    type Output = U;

    fn name(&self) -> &'static str {
        "join"
    }

    fn eval(&mut self, input: Vec<T>, _cfg: &QueryConfig) -> Result<Vec<U>> {
        let inner = self.inner.as_ref().ok_or(QueryError::NilInput)?;
        let (Some(outer_key), Some(inner_key), Some(result)) = (
            self.outer_key.as_mut(),
            self.inner_key.as_mut(),
            self.result.as_mut(),
        ) else {
            return Err(QueryError::NilFunc);
        };

        let mut memo = KeyMemo::new();
        let mut joined = Vec::new();
        for outer in &input {
            let key = outer_key(outer);
            for candidate in inner {
                if *memo.key_of(candidate, inner_key) == key {
                    joined.push(result(outer, candidate));
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            outer = input.len(),
            inner = inner.len(),
            inner_keys = memo.len(),
            matched = joined.len(),
            "join"
        );

        Ok(joined)
    }
}
