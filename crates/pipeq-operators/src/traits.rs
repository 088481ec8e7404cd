//! Operator trait + common interfaces.
//!
//! The `Query` carrier in `pipeq-exec` hands each operator the materialized
//! payload of the previous stage and receives the next stage's payload. An
//! operator never sees a faulted stage: the carrier short-circuits before
//! `eval` is reached.

use pipeq_core::config::QueryConfig;
use pipeq_core::error::Result;

/// A stage-producing operation.
///
/// Invariants:
/// - Callable and companion-sequence arguments are validated before the first
///   element is touched; an absent one faults with `NilFunc` / `NilInput`.
/// - A fault raised while processing elements aborts the stage; no partial
///   output is returned.
pub trait Operator<T> {
    type Output;

    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    /// Evaluate the stage over the full input payload.
    fn eval(&mut self, input: Vec<T>, cfg: &QueryConfig) -> Result<Vec<Self::Output>>;
}
