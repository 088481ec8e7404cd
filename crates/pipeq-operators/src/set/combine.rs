//! Binary set operators over the payload and a companion sequence.
//!
//! Each holds the companion as `Option<Vec<T>>`; `None` is the nil input and
//! faults before any element is touched. Otherwise these never fault.

use std::collections::HashSet;
use std::hash::Hash;

use pipeq_core::config::QueryConfig;
use pipeq_core::error::{QueryError, Result};

use crate::traits::Operator;

use super::collect_unique;

macro_rules! companion_op {
    ($name:ident) => {
        pub struct $name<T> {
            pub other: Option<Vec<T>>,
        }

        impl<T> $name<T> {
            pub fn new(other: impl IntoIterator<Item = T>) -> Self {
                Self {
                    other: Some(other.into_iter().collect()),
                }
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self { other: None }
            }
        }
    };
}

companion_op!(Union);
companion_op!(Intersect);
companion_op!(Except);

/// Every value present in either sequence, once.
impl<T> Operator<T> for Union<T>
where
    T: Eq + Hash + Clone,
{
    type Output = T;

    fn name(&self) -> &'static str {
        "union"
    }

    fn eval(&mut self, input: Vec<T>, cfg: &QueryConfig) -> Result<Vec<T>> {
        let other = self.other.as_ref().ok_or(QueryError::NilInput)?;
        Ok(collect_unique(
            input.into_iter().chain(other.iter().cloned()),
            cfg.set_order,
        ))
    }
}

/// Values present in both sequences, once.
impl<T> Operator<T> for Intersect<T>
where
    T: Eq + Hash + Clone,
{
    type Output = T;

    fn name(&self) -> &'static str {
        "intersect"
    }

    fn eval(&mut self, input: Vec<T>, cfg: &QueryConfig) -> Result<Vec<T>> {
        let other: HashSet<&T> = self
            .other
            .as_ref()
            .ok_or(QueryError::NilInput)?
            .iter()
            .collect();
        Ok(collect_unique(
            input.into_iter().filter(|v| other.contains(&v)),
            cfg.set_order,
        ))
    }
}

/// Payload values that do not appear in the companion, once.
impl<T> Operator<T> for Except<T>
where
    T: Eq + Hash + Clone,
{
    type Output = T;

    fn name(&self) -> &'static str {
        "except"
    }

    fn eval(&mut self, input: Vec<T>, cfg: &QueryConfig) -> Result<Vec<T>> {
        let other: HashSet<&T> = self
            .other
            .as_ref()
            .ok_or(QueryError::NilInput)?
            .iter()
            .collect();
        Ok(collect_unique(
            input.into_iter().filter(|v| !other.contains(&v)),
            cfg.set_order,
        ))
    }
}
