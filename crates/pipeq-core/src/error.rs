use std::sync::Arc;

use thiserror::Error;

/// Canonical result for every pipeline operation.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Shared error returned by a caller-supplied callable.
pub type CallbackError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Faults a pipeline can carry.
///
/// The first seven variants are sentinels: they carry no payload so callers can
/// match on them directly. A fault attached to a pipeline is never cleared by a
/// later stage; it surfaces from the terminal operation.
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    #[error("passed evaluation function is nil")]
    NilFunc,

    #[error("nil sequence passed as input to function")]
    NilInput,

    #[error("element satisfying the conditions does not exist")]
    NoElement,

    #[error("empty sequence, operation requires non-empty results sequence")]
    EmptySequence,

    #[error("parameter cannot be negative")]
    NegativeParam,

    #[error("sequence contains an element of non-numeric types")]
    NonNumeric,

    #[error("sequence contains element(s) with type different than requested type or nil")]
    TypeMismatch,

    /// A predicate, mapper or equivalence returned an error of its own.
    #[error("callable failed: {0}")]
    Callback(#[source] CallbackError),
}

impl QueryError {
    /// Wrap an arbitrary error (or message) raised inside a callable.
    pub fn callback(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        QueryError::Callback(Arc::from(err.into()))
    }

    /// True for the payload-free sentinel faults.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, QueryError::Callback(_))
    }
}

// Sentinels compare by variant; callback faults only equal their own clones.
impl PartialEq for QueryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (QueryError::Callback(a), QueryError::Callback(b)) => Arc::ptr_eq(a, b),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}
