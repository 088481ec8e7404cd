//! Stage tracing hooks.
//!
//! Compiled to no-ops unless the `tracing` feature is on. Every event is
//! emitted at TRACE level under the `pipeq` target; faults are reported to the
//! caller through the pipeline, these only describe what a stage did.

use pipeq_core::error::QueryError;

#[cfg(feature = "tracing")]
pub fn stage_evaluated(op: &str, rows_in: usize, rows_out: usize) {
    tracing::trace!(target: "pipeq", op, rows_in, rows_out, "stage evaluated");
}

#[cfg(not(feature = "tracing"))]
pub fn stage_evaluated(_op: &str, _rows_in: usize, _rows_out: usize) { /* no-op */
}

#[cfg(feature = "tracing")]
pub fn stage_faulted(op: &str, rows_in: usize, err: &QueryError) {
    tracing::trace!(target: "pipeq", op, rows_in, error = %err, "stage faulted");
}

#[cfg(not(feature = "tracing"))]
pub fn stage_faulted(_op: &str, _rows_in: usize, _err: &QueryError) { /* no-op */
}

#[cfg(feature = "tracing")]
pub fn stage_skipped(op: &str, err: &QueryError) {
    tracing::trace!(target: "pipeq", op, error = %err, "stage skipped on faulted pipeline");
}

#[cfg(not(feature = "tracing"))]
pub fn stage_skipped(_op: &str, _err: &QueryError) { /* no-op */
}
