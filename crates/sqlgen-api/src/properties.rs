//! Plugin-level configuration property store

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Plugin-level default properties, bound once at plugin construction
///
/// Keys are the raw configuration identifiers (for the cache plugin,
/// `cache_eviction` and friends); values are taken verbatim. The store is
/// read-only after construction: per-table overrides come from
/// [`TableConfiguration`](crate::ports::TableConfiguration), not from
/// mutating this map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyStore {
    properties: HashMap<String, String>,
}

impl PropertyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Number of properties in the store
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when the store holds no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
