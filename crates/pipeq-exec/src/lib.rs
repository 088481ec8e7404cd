#![forbid(unsafe_code)]
//! pipeq-exec: the `Query` carrier.
//!
//! A `Query<T>` owns either a materialized payload or the first fault raised
//! while building it. Every stage runs an operator from `pipeq-operators`
//! through [`Query::apply`], which skips evaluation once a fault is attached.

pub mod metrics;
pub mod query;

pub use query::Query;
