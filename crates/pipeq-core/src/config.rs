//! Pipeline configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

/// Output order of hash-backed operations (distinct, union, intersect,
/// except, group join).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetOrder {
    /// Whatever order the hash table yields. Callers must not rely on it.
    #[default]
    Hashed,
    /// First occurrence order across the inputs, deterministic.
    FirstSeen,
}

impl SetOrder {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hashed" => Some(SetOrder::Hashed),
            "first_seen" | "first-seen" | "insertion" => Some(SetOrder::FirstSeen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Output order for set-derived stages.
    pub set_order: SetOrder,

    /// Use a stable sort for ordering stages. When false an unstable sort is
    /// used and equal elements may swap.
    pub stable_sort: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            set_order: SetOrder::Hashed,
            stable_sort: true,
        }
    }
}

impl QueryConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `PIPEQ_SET_ORDER`: `hashed` or `first_seen`
    /// - `PIPEQ_STABLE_SORT`: `true`/`false` (or `1`/`0`)
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("PIPEQ_SET_ORDER") {
            if let Some(order) = SetOrder::parse(&s) {
                cfg.set_order = order;
            }
        }

        if let Ok(s) = std::env::var("PIPEQ_STABLE_SORT") {
            if let Some(v) = parse_flag(&s) {
                cfg.stable_sort = v;
            }
        }

        cfg
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn with_set_order(mut self, order: SetOrder) -> Self {
        self.set_order = order;
        self
    }

    pub fn with_stable_sort(mut self, stable: bool) -> Self {
        self.stable_sort = stable;
        self
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
