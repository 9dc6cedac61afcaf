//! Cache directive plugin for generated sqlMap documents
//!
//! Appends a `<cache>` element to each generated mapping document,
//! populated from up to five optional configuration properties:
//!
//! - `cache_eviction`
//! - `cache_flushInterval`
//! - `cache_readOnly`
//! - `cache_size`
//! - `cache_type`
//!
//! Each property corresponds to one attribute of the cache element and
//! is passed through verbatim. Every property can be set at the plugin
//! level or overridden per table; the table value wins.

pub mod plugin;
pub mod setting;

pub use plugin::CachePlugin;
pub use setting::CacheSetting;
