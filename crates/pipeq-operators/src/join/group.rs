//! Group join: one result per distinct outer value.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use pipeq_core::config::{QueryConfig, SetOrder};
use pipeq_core::error::{QueryError, Result};

use crate::traits::Operator;

use super::KeyMemo;

/// Collects the matching inner elements of each outer element and calls
/// `result(outer, group)` once per group.
///
/// Groups are keyed by the outer element's own value, so equal outer elements
/// collapse into a single group (the last occurrence's matches win). An outer
/// value without matches still yields one call with an empty group. Group order
/// follows `QueryConfig::set_order`.
pub struct GroupJoin<I, K, U, OK, IK, R> {
    pub inner: Option<Vec<I>>,
    pub outer_key: Option<OK>,
    pub inner_key: Option<IK>,
    pub result: Option<R>,
    _types: PhantomData<fn() -> (K, U)>,
}

impl<I, K, U, OK, IK, R> GroupJoin<I, K, U, OK, IK, R> {
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

impl<I, K, U, OK, IK, R> Default for GroupJoin<I, K, U, OK, IK, R> {
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

impl<T, I, K, U, OK, IK, R> Operator<T> for GroupJoin<I, K, U, OK, IK, R>
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
    K: PartialEq,
    OK: FnMut(&T) -> K,
    IK: FnMut(&I) -> K,
    R: FnMut(T, Vec<I>) -> U,
{
    type Output = U;

    fn name(&self) -> &'static str {
        "group_join"
    }

    fn eval(&mut self, input: Vec<T>, cfg: &QueryConfig) -> Result<Vec<U>> {
        let inner = self.inner.as_ref().ok_or(QueryError::NilInput)?;
        let (Some(outer_key), Some(inner_key), Some(result)) = (
            self.outer_key.as_mut(),
            self.inner_key.as_mut(),
            self.result.as_mut(),
        ) else {
            return Err(QueryError::NilFunc);
        };

        let mut memo = KeyMemo::new();
        let mut groups: HashMap<T, Vec<I>> = HashMap::new();
        let mut first_seen: Vec<T> = Vec::new();

        for outer in input {
            let key = outer_key(&outer);
            let mut bucket = Vec::new();
            for candidate in inner {
                if *memo.key_of(candidate, inner_key) == key {
                    bucket.push(candidate.clone());
                }
            }
            if cfg.set_order == SetOrder::FirstSeen && !groups.contains_key(&outer) {
                first_seen.push(outer.clone());
            }
            groups.insert(outer, bucket);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            groups = groups.len(),
            inner = inner.len(),
            inner_keys = memo.len(),
            "group_join"
        );

        let out = match cfg.set_order {
            SetOrder::Hashed => groups
                .into_iter()
                .map(|(outer, group)| result(outer, group))
                .collect(),
            SetOrder::FirstSeen => first_seen
                .into_iter()
                .map(|outer| {
                    let group = groups.remove(&outer).unwrap_or_default();
                    result(outer, group)
                })
                .collect(),
        };
        Ok(out)
    }
}
