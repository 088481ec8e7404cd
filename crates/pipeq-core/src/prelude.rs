//! Convenient re-exports for downstream crates.

pub use crate::coerce::Coerce;
pub use crate::config::{QueryConfig, SetOrder};
pub use crate::error::{CallbackError, QueryError, Result};
pub use crate::number::Number;
pub use crate::value::Value;
