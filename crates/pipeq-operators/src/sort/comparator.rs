//! Sorting by a caller-supplied "ordered before" relation.
//!
//! The relation must be a strict weak ordering. With an inconsistent relation
//! the resulting order is unspecified, and the standard library sort may
//! panic.

use std::cmp::Ordering;
use std::rc::Rc;

use pipeq_core::config::QueryConfig;
use pipeq_core::error::{QueryError, Result};

use crate::traits::Operator;

use super::sort_values;

/// Shared "is `a` ordered before `b`" relation.
pub type Less<T> = Rc<dyn Fn(&T, &T) -> bool>;

/// Lift a `less` relation into a total `Ordering`.
fn ordering<T>(less: &dyn Fn(&T, &T) -> bool, a: &T, b: &T) -> Ordering {
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Compose two relations: ties under `first` are broken by `second`.
pub fn then<T: 'static>(first: Less<T>, second: Less<T>) -> Less<T> {
    Rc::new(move |a: &T, b: &T| {
        first(a, b) || (!first(b, a) && second(a, b))
    })
}

pub struct OrderBy<T> {
    pub less: Option<Less<T>>,
}

impl<T> OrderBy<T> {
    pub fn new(less: Less<T>) -> Self {
        Self { less: Some(less) }
    }
}

impl<T> Default for OrderBy<T> {
    fn default() -> Self {
        Self { less: None }
    }
}

impl<T> Operator<T> for OrderBy<T> {
    type Output = T;

    fn name(&self) -> &'static str {
        "order_by"
    }

    fn eval(&mut self, mut input: Vec<T>, cfg: &QueryConfig) -> Result<Vec<T>> {
        let less = self.less.as_ref().ok_or(QueryError::NilFunc)?;
        sort_values(&mut input, cfg, |a, b| ordering(&**less, a, b));
        Ok(input)
    }
}
