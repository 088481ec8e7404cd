//! Map operator (`select`).

use std::marker::PhantomData;

use pipeq_core::config::QueryConfig;
use pipeq_core::error::{QueryError, Result};

use crate::traits::Operator;

/// Replaces every element with the mapper's output.
pub struct Map<F, U> {
    pub mapper: Option<F>,
    _out: PhantomData<fn() -> U>,
}

impl<F, U> Map<F, U> {
    pub fn new(mapper: F) -> Self {
        Self {
            mapper: Some(mapper),
            _out: PhantomData,
        }
    }
}

impl<F, U> Default for Map<F, U> {
    fn default() -> Self {
        Self {
            mapper: None,
            _out: PhantomData,
        }
    }
}

impl<T, U, F> Operator<T> for Map<F, U>
where
    F: FnMut(&T) -> Result<U>,
{
    type Output = U;

    fn name(&self) -> &'static str {
        "map"
    }

    fn eval(&mut self, input: Vec<T>, _cfg: &QueryConfig) -> Result<Vec<U>> {
        let mapper = self.mapper.as_mut().ok_or(QueryError::NilFunc)?;

        let mut mapped = Vec::with_capacity(input.len());
        for v in &input {
            mapped.push(mapper(v)?);
        }
        Ok(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_changes_type() {
        let mut op = Map::new(|v: &i32| Ok(format!("#{v}")));
        let out = op.eval(vec![1, 2], &QueryConfig::default()).unwrap();
        assert_eq!(out, vec!["#1".to_string(), "#2".to_string()]);
    }

    #[test]
    fn test_map_without_mapper() {
        let mut op = Map::<fn(&i32) -> Result<i32>, i32>::default();
        assert!(matches!(
            op.eval(vec![], &QueryConfig::default()),
            Err(QueryError::NilFunc)
        ));
    }

    #[test]
    fn test_map_error_aborts() {
        let mut op = Map::new(|v: &i32| {
            if *v > 1 {
                Err(QueryError::NonNumeric)
            } else {
                Ok(*v * 10)
            }
        });
        assert!(matches!(
            op.eval(vec![1, 2, 3], &QueryConfig::default()),
            Err(QueryError::NonNumeric)
        ));
    }
}
