#![forbid(unsafe_code)]
//! pipeq: chainable, eagerly materialized query pipelines over in-memory
//! sequences.
//!
//! ```
//! use pipeq::prelude::*;
//!
//! let evens = Query::new(1..=10)
//!     .where_(|v| Ok(v % 2 == 0))
//!     .select(|v| Ok(v * v))
//!     .take(3)
//!     .results()
//!     .unwrap();
//! assert_eq!(evens, vec![4, 16, 36]);
//! ```
//!
//! Every stage either transforms the payload or carries the first fault
//! forward; terminals (`count`, `first`, `sum`, ...) hand back a
//! `Result<_, QueryError>`.

pub use pipeq_core::{values, Coerce, Number, QueryConfig, QueryError, Result, SetOrder, Value};
pub use pipeq_exec::Query;

/// Building blocks for custom stages run through [`Query::apply`].
pub mod operators {
    pub use pipeq_operators::*;
}

pub mod prelude {
    pub use pipeq_core::prelude::*;
    pub use pipeq_exec::Query;
    pub use pipeq_operators::Operator;
}

/// Shorthand for [`Query::new`].
pub fn from<T>(values: impl IntoIterator<Item = T>) -> Query<T> {
    Query::new(values)
}

/// Shorthand for [`Query::range`].
pub fn range(start: i64, count: i64) -> Query<i64> {
    Query::range(start, count)
}
