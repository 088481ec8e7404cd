//! The chainable pipeline carrier.

use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use pipeq_core::coerce::Coerce;
use pipeq_core::config::QueryConfig;
use pipeq_core::error::{QueryError, Result};
use pipeq_operators::aggregate::{self, MinMax};
use pipeq_operators::scan;
use pipeq_operators::sort::{self, Less, OrderBy, OrderKind, TypedSort};
use pipeq_operators::{
    Distinct, DistinctBy, Except, Filter, GroupJoin, Intersect, Join, Map, Operator, Reverse,
    Skip, SkipWhile, Take, TakeWhile, Union,
};

use crate::metrics;

/// An eagerly materialized pipeline stage.
///
/// Holds either the current payload or the first fault raised while producing
/// it. Stage methods consume `self` and return the next stage; once faulted,
/// every later stage passes the fault through untouched and terminal methods
/// return it. Callables are never invoked on a faulted pipeline.
///
/// The comparator attached by [`Query::order_by`] lives only on the stage that
/// `order_by`/[`Query::then_by`] returned; any other stage drops it.
#[derive(Clone)]
pub struct Query<T> {
    state: Result<Vec<T>>,
    less: Option<Less<T>>,
    cfg: QueryConfig,
}

impl<T> Query<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self::from_state(Ok(values.into_iter().collect()), QueryConfig::default())
    }

    /// A pipeline over a sequence that may be absent; `None` faults with
    /// [`QueryError::NilInput`].
    pub fn from_nullable(values: Option<Vec<T>>) -> Self {
        Self::from_state(values.ok_or(QueryError::NilInput), QueryConfig::default())
    }

    /// A pipeline that already carries `err`.
    pub fn faulted(err: QueryError) -> Self {
        Self::from_state(Err(err), QueryConfig::default())
    }

    fn from_state(state: Result<Vec<T>>, cfg: QueryConfig) -> Self {
        Self {
            state,
            less: None,
            cfg,
        }
    }

    /// Replace the configuration used by this and every later stage.
    pub fn with_config(mut self, cfg: QueryConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn config(&self) -> &QueryConfig {
        &self.cfg
    }

    /// The payload, or the fault the pipeline carries.
    pub fn results(self) -> Result<Vec<T>> {
        self.state
    }

    pub fn error(&self) -> Option<&QueryError> {
        self.state.as_ref().err()
    }

    pub fn is_faulted(&self) -> bool {
        self.state.is_err()
    }

    /// True when the previous stage was `order_by`/`then_by`.
    pub fn has_comparator(&self) -> bool {
        self.less.is_some()
    }

    /// Run `op` as the next stage.
    pub fn apply<O>(self, mut op: O) -> Query<O::Output>
    where
        O: Operator<T>,
    {
        let Query { state, cfg, .. } = self;
        let input = match state {
            Ok(input) => input,
            Err(err) => {
                metrics::stage_skipped(op.name(), &err);
                return Query::from_state(Err(err), cfg);
            }
        };

        let rows_in = input.len();
        let state = op.eval(input, &cfg);
        match &state {
            Ok(out) => metrics::stage_evaluated(op.name(), rows_in, out.len()),
            Err(err) => metrics::stage_faulted(op.name(), rows_in, err),
        }
        Query::from_state(state, cfg)
    }

    // ---- filtering & projection ----

    /// Keep the elements `predicate` accepts, in order.
    pub fn where_<F>(self, predicate: F) -> Self
    where
        F: FnMut(&T) -> Result<bool>,
    {
        self.apply(Filter::new(predicate))
    }

    /// Replace every element with `mapper`'s output.
    pub fn select<U, F>(self, mapper: F) -> Query<U>
    where
        F: FnMut(&T) -> Result<U>,
    {
        self.apply(Map::new(mapper))
    }

    // ---- set algebra ----

    /// Drop elements for which `equivalence` matches an earlier kept element.
    ///
    /// Quadratic in the worst case; prefer [`Query::distinct`] when natural
    /// equality is enough.
    pub fn distinct_by<F>(self, equivalence: F) -> Self
    where
        F: FnMut(&T, &T) -> Result<bool>,
    {
        self.apply(DistinctBy::new(equivalence))
    }

    // ---- ordering ----

    /// Sort with the "ordered before" relation `less` and attach it for
    /// [`Query::then_by`].
    pub fn order_by<F>(self, less: F) -> Self
    where
        T: 'static,
        F: Fn(&T, &T) -> bool + 'static,
    {
        self.sort_with(Rc::new(less))
    }

    /// Break ties of the attached comparator with `less` and re-sort.
    pub fn then_by<F>(self, less: F) -> Self
    where
        T: 'static,
        F: Fn(&T, &T) -> bool + 'static,
    {
        let second: Less<T> = Rc::new(less);
        let composed = match &self.less {
            Some(first) => sort::then(Rc::clone(first), second),
            None => second,
        };
        self.sort_with(composed)
    }

    fn sort_with(self, less: Less<T>) -> Self {
        let mut sorted = self.apply(OrderBy::new(Rc::clone(&less)));
        if !sorted.is_faulted() {
            sorted.less = Some(less);
        }
        sorted
    }

    // ---- joins ----

    /// Inner join on key equality, emitting `result(outer, inner)` per match.
    ///
    /// Inner keys are computed at most once per distinct inner value.
    pub fn join<I, K, U, OK, IK, R>(
        self,
        inner: impl IntoIterator<Item = I>,
        outer_key: OK,
        inner_key: IK,
        result: R,
    ) -> Query<U>
    where
        I: Eq + Hash + Clone,
        K: PartialEq,
        OK: FnMut(&T) -> K,
        IK: FnMut(&I) -> K,
        R: FnMut(&T, &I) -> U,
    {
        self.apply(Join::new(
            inner.into_iter().collect(),
            outer_key,
            inner_key,
            result,
        ))
    }

    // ---- positional ----

    pub fn take(self, n: isize) -> Self {
        self.apply(Take { n })
    }

    pub fn skip(self, n: isize) -> Self {
        self.apply(Skip { n })
    }

    pub fn take_while<F>(self, predicate: F) -> Self
    where
        F: FnMut(&T) -> Result<bool>,
    {
        self.apply(TakeWhile::new(predicate))
    }

    pub fn skip_while<F>(self, predicate: F) -> Self
    where
        F: FnMut(&T) -> Result<bool>,
    {
        self.apply(SkipWhile::new(predicate))
    }

    pub fn reverse(self) -> Self {
        self.apply(Reverse)
    }

    // ---- terminals ----

    pub fn count(self) -> Result<usize> {
        Ok(self.state?.len())
    }

    pub fn count_by<F>(self, predicate: F) -> Result<usize>
    where
        F: FnMut(&T) -> Result<bool>,
    {
        scan::count_by(&self.state?, Some(predicate))
    }

    pub fn any(self) -> Result<bool> {
        Ok(!self.state?.is_empty())
    }

    /// Stops at the first element `predicate` accepts.
    pub fn any_with<F>(self, predicate: F) -> Result<bool>
    where
        F: FnMut(&T) -> Result<bool>,
    {
        scan::any_with(&self.state?, Some(predicate))
    }

    /// True on an empty payload.
    pub fn all<F>(self, predicate: F) -> Result<bool>
    where
        F: FnMut(&T) -> Result<bool>,
    {
        scan::all(&self.state?, Some(predicate))
    }

    /// Exactly one element satisfies `predicate`.
    pub fn single<F>(self, predicate: F) -> Result<bool>
    where
        F: FnMut(&T) -> Result<bool>,
    {
        Ok(self.count_by(predicate)? == 1)
    }

    pub fn first(self) -> Result<T> {
        self.first_or_none()?.ok_or(QueryError::NoElement)
    }

    pub fn first_or_none(self) -> Result<Option<T>> {
        Ok(self.state?.into_iter().next())
    }

    pub fn first_by<F>(self, predicate: F) -> Result<T>
    where
        F: FnMut(&T) -> Result<bool>,
    {
        self.first_or_none_by(predicate)?.ok_or(QueryError::NoElement)
    }

    pub fn first_or_none_by<F>(self, predicate: F) -> Result<Option<T>>
    where
        F: FnMut(&T) -> Result<bool>,
    {
        let values = self.state?;
        let at = scan::position(&values, Some(predicate))?;
        Ok(at.and_then(|i| values.into_iter().nth(i)))
    }

    pub fn last(self) -> Result<T> {
        self.last_or_none()?.ok_or(QueryError::NoElement)
    }

    pub fn last_or_none(self) -> Result<Option<T>> {
        Ok(self.state?.pop())
    }

    /// Scans from the end; stops at the first match.
    pub fn last_by<F>(self, predicate: F) -> Result<T>
    where
        F: FnMut(&T) -> Result<bool>,
    {
        self.last_or_none_by(predicate)?.ok_or(QueryError::NoElement)
    }

    pub fn last_or_none_by<F>(self, predicate: F) -> Result<Option<T>>
    where
        F: FnMut(&T) -> Result<bool>,
    {
        let values = self.state?;
        let at = scan::rposition(&values, Some(predicate))?;
        Ok(at.and_then(|i| values.into_iter().nth(i)))
    }

    /// The element at `index`: `NegativeParam` below zero, `NoElement` past
    /// the end.
    pub fn element_at(self, index: isize) -> Result<T> {
        self.element_at_or_none(index)?.ok_or(QueryError::NoElement)
    }

    /// Like [`Query::element_at`] but out of range is `Ok(None)`. A negative
    /// index still faults.
    pub fn element_at_or_none(self, index: isize) -> Result<Option<T>> {
        let values = self.state?;
        let index = usize::try_from(index).map_err(|_| QueryError::NegativeParam)?;
        Ok(values.into_iter().nth(index))
    }
}

impl<T> Query<T>
where
    T: Eq + Hash + Clone,
{
    /// Unique elements by natural equality. Order follows
    /// [`QueryConfig::set_order`].
    pub fn distinct(self) -> Self {
        self.apply(Distinct)
    }

    pub fn union(self, other: impl IntoIterator<Item = T>) -> Self {
        self.apply(Union::new(other))
    }

    pub fn intersect(self, other: impl IntoIterator<Item = T>) -> Self {
        self.apply(Intersect::new(other))
    }

    pub fn except(self, other: impl IntoIterator<Item = T>) -> Self {
        self.apply(Except::new(other))
    }

    /// One `result(outer, matches)` per distinct outer value.
    pub fn group_join<I, K, U, OK, IK, R>(
        self,
        inner: impl IntoIterator<Item = I>,
        outer_key: OK,
        inner_key: IK,
        result: R,
    ) -> Query<U>
    where
        I: Eq + Hash + Clone,
        K: PartialEq,
        OK: FnMut(&T) -> K,
        IK: FnMut(&I) -> K,
        R: FnMut(T, Vec<I>) -> U,
    {
        self.apply(GroupJoin::new(
            inner.into_iter().collect(),
            outer_key,
            inner_key,
            result,
        ))
    }
}

impl<T: Coerce> Query<T> {
    pub fn order_ints(self) -> Self {
        self.apply(TypedSort::new(OrderKind::Ints))
    }

    pub fn order_uints(self) -> Self {
        self.apply(TypedSort::new(OrderKind::Uints))
    }

    /// Ascending, with NaN ahead of every other value.
    pub fn order_floats(self) -> Self {
        self.apply(TypedSort::new(OrderKind::Floats))
    }

    pub fn order_strings(self) -> Self {
        self.apply(TypedSort::new(OrderKind::Strings))
    }

    pub fn sum(self) -> Result<f64> {
        aggregate::sum(&self.state?)
    }

    pub fn average(self) -> Result<f64> {
        aggregate::average(&self.state?)
    }

    fn int_bounds(self) -> Result<MinMax<i64>> {
        aggregate::min_max_ints(&self.state?)
    }

    fn uint_bounds(self) -> Result<MinMax<u64>> {
        aggregate::min_max_uints(&self.state?)
    }

    fn float_bounds(self) -> Result<MinMax<f64>> {
        aggregate::min_max_floats(&self.state?)
    }

    pub fn min_int(self) -> Result<i64> {
        Ok(self.int_bounds()?.min)
    }

    pub fn max_int(self) -> Result<i64> {
        Ok(self.int_bounds()?.max)
    }

    pub fn min_uint(self) -> Result<u64> {
        Ok(self.uint_bounds()?.min)
    }

    pub fn max_uint(self) -> Result<u64> {
        Ok(self.uint_bounds()?.max)
    }

    pub fn min_float(self) -> Result<f64> {
        Ok(self.float_bounds()?.min)
    }

    pub fn max_float(self) -> Result<f64> {
        Ok(self.float_bounds()?.max)
    }
}

impl Query<i64> {
    /// `count` consecutive integers from `start`; a negative count faults.
    pub fn range(start: i64, count: i64) -> Self {
        Self::from_state(pipeq_operators::range::range(start, count), QueryConfig::default())
    }
}

impl<T> From<Vec<T>> for Query<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_state(Ok(values), QueryConfig::default())
    }
}

impl<T> FromIterator<T> for Query<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("state", &self.state)
            .field("comparator", &self.less.is_some())
            .field("cfg", &self.cfg)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeq_core::config::SetOrder;
    use std::cell::Cell;

    fn first_seen() -> QueryConfig {
        QueryConfig::default().with_set_order(SetOrder::FirstSeen)
    }

    #[test]
    fn test_chain_where_select() {
        let out = Query::new(1..=6)
            .where_(|v| Ok(v % 2 == 0))
            .select(|v| Ok(v * 10))
            .results()
            .unwrap();
        assert_eq!(out, vec![20, 40, 60]);
    }

    #[test]
    fn test_fault_is_sticky_and_skips_callables() {
        let called = Cell::new(false);
        let q = Query::<i32>::faulted(QueryError::NegativeParam)
            .where_(|_| {
                called.set(true);
                Ok(true)
            })
            .select(|v| {
                called.set(true);
                Ok(*v)
            })
            .distinct();
        assert!(!called.get());
        assert_eq!(q.count(), Err(QueryError::NegativeParam));
    }

    #[test]
    fn test_stage_fault_discards_payload() {
        let q = Query::new(vec![1, 2, 3]).select(|v| {
            if *v == 2 {
                Err(QueryError::callback("two"))
            } else {
                Ok(*v)
            }
        });
        assert!(matches!(q.error(), Some(QueryError::Callback(_))));
        assert!(q.take(1).results().is_err());
    }

    #[test]
    fn test_from_nullable() {
        let q: Query<i32> = Query::from_nullable(None);
        assert_eq!(q.error(), Some(&QueryError::NilInput));
        let q = Query::from_nullable(Some(vec![1]));
        assert!(!q.is_faulted());
    }

    #[test]
    fn test_apply_default_operator_is_nil_func() {
        let q = Query::new(vec![1, 2]).apply(Filter::<fn(&i32) -> Result<bool>>::default());
        assert_eq!(q.results(), Err(QueryError::NilFunc));
    }

    #[test]
    fn test_config_travels_with_pipeline() {
        let q = Query::new(vec![3, 1, 3, 2])
            .with_config(first_seen())
            .where_(|_| Ok(true));
        assert_eq!(q.config().set_order, SetOrder::FirstSeen);
        assert_eq!(q.distinct().results().unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_order_by_then_by() {
        let people = vec![("bo", 30), ("al", 25), ("cy", 30), ("di", 25)];
        let q = Query::new(people)
            .order_by(|a, b| a.1 < b.1)
            .then_by(|a, b| a.0 > b.0);
        assert!(q.has_comparator());
        let out = q.results().unwrap();
        assert_eq!(out, vec![("di", 25), ("al", 25), ("cy", 30), ("bo", 30)]);
    }

    #[test]
    fn test_then_by_without_comparator_orders() {
        let q = Query::new(vec![3, 1, 2]).then_by(|a, b| a < b);
        assert!(q.has_comparator());
        assert_eq!(q.results(), Ok(vec![1, 2, 3]));

        let q = Query::new(vec![3, 1, 2]).take(3).then_by(|a, b| a > b);
        assert!(q.has_comparator());
        assert_eq!(q.results(), Ok(vec![3, 2, 1]));
    }

    #[test]
    fn test_comparator_dropped_by_other_stages() {
        let q = Query::new(vec![2, 1])
            .order_by(|a, b| a < b)
            .take(5);
        assert!(!q.has_comparator());
    }

    #[test]
    fn test_element_access() {
        let q = || Query::new(vec![10, 20, 30]);
        assert_eq!(q().first(), Ok(10));
        assert_eq!(q().last(), Ok(30));
        assert_eq!(q().element_at(1), Ok(20));
        assert_eq!(q().element_at(3), Err(QueryError::NoElement));
        assert_eq!(q().element_at(-1), Err(QueryError::NegativeParam));
        assert_eq!(q().element_at_or_none(3), Ok(None));
        assert_eq!(q().element_at_or_none(-1), Err(QueryError::NegativeParam));
        assert_eq!(q().first_by(|v| Ok(*v > 10)), Ok(20));
        assert_eq!(q().last_by(|v| Ok(*v < 30)), Ok(20));
        assert_eq!(q().first_by(|v| Ok(*v > 99)), Err(QueryError::NoElement));
        assert_eq!(q().last_or_none_by(|v| Ok(*v > 99)), Ok(None));

        let empty = || Query::new(Vec::<i32>::new());
        assert_eq!(empty().first(), Err(QueryError::NoElement));
        assert_eq!(empty().first_or_none(), Ok(None));
        assert_eq!(empty().last_or_none(), Ok(None));
    }

    #[test]
    fn test_scans() {
        let q = || Query::new(vec![1, 2, 3, 4]);
        assert_eq!(q().count(), Ok(4));
        assert_eq!(q().count_by(|v| Ok(v % 2 == 0)), Ok(2));
        assert_eq!(q().any(), Ok(true));
        assert_eq!(q().any_with(|v| Ok(*v > 3)), Ok(true));
        assert_eq!(q().all(|v| Ok(*v > 0)), Ok(true));
        assert_eq!(q().single(|v| Ok(*v == 2)), Ok(true));
        assert_eq!(q().single(|v| Ok(*v > 2)), Ok(false));
        assert_eq!(Query::new(Vec::<i32>::new()).all(|_| Ok(false)), Ok(true));
    }

    #[test]
    fn test_numeric_terminals() {
        assert_eq!(Query::new(vec![1, 2, 3, 4]).sum(), Ok(10.0));
        assert_eq!(Query::new(vec![1, 2, 3, 4]).average(), Ok(2.5));
        assert_eq!(
            Query::new(Vec::<f64>::new()).average(),
            Err(QueryError::EmptySequence)
        );
        assert_eq!(Query::new(vec![4i32, -3, 9]).min_int(), Ok(-3));
        assert_eq!(Query::new(vec![4u8, 3, 9]).max_uint(), Ok(9));
        assert_eq!(Query::new(vec![0.5, -1.5]).min_float(), Ok(-1.5));
        assert_eq!(
            Query::new(vec![1u32]).min_int(),
            Err(QueryError::TypeMismatch)
        );
    }

    #[test]
    fn test_range() {
        assert_eq!(Query::range(5, 3).results(), Ok(vec![5, 6, 7]));
        assert_eq!(Query::range(5, 0).count(), Ok(0));
        assert_eq!(Query::range(0, -1).results(), Err(QueryError::NegativeParam));
    }

    #[test]
    fn test_join_through_query() {
        let out = Query::new(vec![1, 2, 3])
            .join(
                vec![(1, "a"), (3, "c"), (3, "cc")],
                |o| *o,
                |i| i.0,
                |o, i| format!("{o}{}", i.1),
            )
            .results()
            .unwrap();
        assert_eq!(out, vec!["1a", "3c", "3cc"]);
    }
}
