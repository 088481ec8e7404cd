//! Type-specialized ascending sorts.
//!
//! The element itself is kept; only its coerced key drives the order. For
//! `Value` payloads a single element of the wrong kind faults the whole sort
//! with `TypeMismatch` before anything is reordered.

use std::cmp::Ordering;

use pipeq_core::coerce::Coerce;
use pipeq_core::config::QueryConfig;
use pipeq_core::error::{QueryError, Result};

use crate::traits::Operator;

use super::sort_values;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Ints,
    Uints,
    Floats,
    Strings,
}

#[derive(Debug, Clone, Copy)]
pub struct TypedSort {
    pub kind: OrderKind,
}

impl TypedSort {
    pub fn new(kind: OrderKind) -> Self {
        Self { kind }
    }
}

/// Coerced sort key, one variant per `OrderKind`.
enum Key {
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl Key {
    fn extract<T: Coerce>(kind: OrderKind, v: &T) -> Option<Key> {
        match kind {
            OrderKind::Ints => v.as_int().map(Key::Int),
            OrderKind::Uints => v.as_uint().map(Key::Uint),
            OrderKind::Floats => v.as_float().map(Key::Float),
            OrderKind::Strings => v.as_text().map(|s| Key::Text(s.to_string())),
        }
    }

    fn compare(&self, other: &Key) -> Ordering {
        match (self, other) {
            (Key::Int(a), Key::Int(b)) => a.cmp(b),
            (Key::Uint(a), Key::Uint(b)) => a.cmp(b),
            (Key::Float(a), Key::Float(b)) => float_cmp(*a, *b),
            (Key::Text(a), Key::Text(b)) => a.cmp(b),
            // Keys come from a single OrderKind.
            _ => Ordering::Equal,
        }
    }
}

/// Ascending float order with NaN placed before every other value.
pub fn float_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl<T: Coerce> Operator<T> for TypedSort {
    type Output = T;

    fn name(&self) -> &'static str {
        match self.kind {
            OrderKind::Ints => "order_ints",
            OrderKind::Uints => "order_uints",
            OrderKind::Floats => "order_floats",
            OrderKind::Strings => "order_strings",
        }
    }

    fn eval(&mut self, input: Vec<T>, cfg: &QueryConfig) -> Result<Vec<T>> {
        let mut keyed = Vec::with_capacity(input.len());
        for v in input {
            let key = Key::extract(self.kind, &v).ok_or(QueryError::TypeMismatch)?;
            keyed.push((key, v));
        }

        sort_values(&mut keyed, cfg, |(a, _), (b, _)| a.compare(b));
        Ok(keyed.into_iter().map(|(_, v)| v).collect())
    }
}
