//! Relational joins.
//!
//! Both joins compare every outer element with every inner element
//! (O(outer × inner)). Inner keys are memoized by inner *value*: an inner
//! element's key is computed once and reused for later outer elements and for
//! equal inner elements.

use std::collections::HashMap;
use std::hash::Hash;

pub mod group;
pub mod nested;

pub use group::GroupJoin;
pub use nested::Join;

/// Lazily filled inner-key lookup table.
pub(crate) struct KeyMemo<I, K> {
    keys: HashMap<I, K>,
}

impl<I, K> KeyMemo<I, K>
where
    I: Eq + Hash + Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    /// Key of `inner`, computing it with `select` on first sight.
    pub(crate) fn key_of<F>(&mut self, inner: &I, select: &mut F) -> &K
    where
        F: FnMut(&I) -> K,
    {
        if !self.keys.contains_key(inner) {
            let key = select(inner);
            self.keys.insert(inner.clone(), key);
        }
        &self.keys[inner]
    }

    /// Number of distinct inner values whose key was computed.
    #[cfg(any(test, feature = "tracing"))]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}
