#![forbid(unsafe_code)]
//! pipeq-operators: stage operators and terminal scans.
//!
//! Design intent:
//! - Pure and synchronous; every stage materializes its whole output.
//! - One struct per stage-producing operation, implementing [`Operator`].
//!   Callables and companion sequences are `Option` fields so that an absent
//!   argument is representable and faults before any element is processed.
//! - Terminal scans (`scan`, `aggregate`) are free functions over slices.

pub mod traits;

pub mod filter;
pub mod map;
pub mod slice;

pub mod join;
pub mod set;
pub mod sort;

pub mod aggregate;
pub mod range;
pub mod scan;

pub use filter::Filter;
pub use join::{GroupJoin, Join};
pub use map::Map;
pub use set::{Distinct, DistinctBy, Except, Intersect, Union};
pub use slice::{Reverse, Skip, SkipWhile, Take, TakeWhile};
pub use sort::{Less, OrderBy, OrderKind, TypedSort};
pub use traits::Operator;
