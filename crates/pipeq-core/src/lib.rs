#![forbid(unsafe_code)]
//! pipeq-core: the fault taxonomy, loosely-typed values, numeric coercion and
//! configuration shared by every pipeq crate.
//!
//! Pure data and small helpers only. No operators live here; see
//! `pipeq-operators` for stage logic and `pipeq-exec` for the `Query` carrier.

pub mod coerce;
pub mod config;
pub mod error;
pub mod number;
pub mod prelude;
pub mod value;

pub use coerce::Coerce;
pub use config::{QueryConfig, SetOrder};
pub use error::{QueryError, Result};
pub use number::Number;
pub use value::Value;
