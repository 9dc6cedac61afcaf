//! The fixed set of cache-related configuration properties

use serde::{Deserialize, Serialize};

/// One cache setting: a configuration key and the attribute it feeds
///
/// The set is closed and ordered; emitted attributes always appear in
/// the order of [`CacheSetting::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CacheSetting {
    /// `cache_eviction` feeds the `eviction` attribute
    Eviction,
    /// `cache_flushInterval` feeds the `flushInterval` attribute
    FlushInterval,
    /// `cache_readOnly` feeds the `readOnly` attribute
    ReadOnly,
    /// `cache_size` feeds the `size` attribute
    Size,
    /// `cache_type` feeds the `type` attribute
    Type,
}

impl CacheSetting {
    /// All settings, in output attribute order
    pub const ALL: [CacheSetting; 5] = [
        CacheSetting::Eviction,
        CacheSetting::FlushInterval,
        CacheSetting::ReadOnly,
        CacheSetting::Size,
        CacheSetting::Type,
    ];

    /// Configuration key looked up in table and plugin properties
    pub fn config_key(self) -> &'static str {
        match self {
            CacheSetting::Eviction => "cache_eviction",
            CacheSetting::FlushInterval => "cache_flushInterval",
            CacheSetting::ReadOnly => "cache_readOnly",
            CacheSetting::Size => "cache_size",
            CacheSetting::Type => "cache_type",
        }
    }

    /// Name of the attribute emitted on the `<cache>` element
    pub fn attribute_name(self) -> &'static str {
        match self {
            CacheSetting::Eviction => "eviction",
            CacheSetting::FlushInterval => "flushInterval",
            CacheSetting::ReadOnly => "readOnly",
            CacheSetting::Size => "size",
            CacheSetting::Type => "type",
        }
    }
}
