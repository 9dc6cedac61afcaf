//! The cache plugin

use std::sync::Arc;

use sqlgen_api::{
    Attribute, CommentAnnotator, Document, PropertyStore, Result, SqlMapPlugin,
    TableConfiguration, XmlElement,
};
use tracing::debug;

use crate::setting::CacheSetting;

/// Appends a `<cache>` directive to each generated sqlMap document
///
/// For every setting in [`CacheSetting::ALL`] the table-level value is
/// consulted first; only when the table defines none does the
/// plugin-level default apply. Empty values never become attributes, and
/// an empty table-level value also masks the plugin-level default.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use sqlgen_api::{NullCommentAnnotator, PropertyStore};
/// use sqlgen_plugin_cache::CachePlugin;
///
/// let defaults: PropertyStore = [("cache_type", "LRU")].into_iter().collect();
/// let plugin = CachePlugin::new(defaults, Arc::new(NullCommentAnnotator));
/// let mut warnings = Vec::new();
/// assert!(sqlgen_api::SqlMapPlugin::validate(&plugin, &mut warnings));
/// ```
#[derive(Debug)]
pub struct CachePlugin {
    properties: PropertyStore,
    comments: Arc<dyn CommentAnnotator>,
}

impl CachePlugin {
    /// Tag name of the element emitted into the document
    pub const ELEMENT_NAME: &'static str = "cache";

    /// Create a plugin bound to plugin-level defaults and the host's
    /// comment facility
    pub fn new(properties: PropertyStore, comments: Arc<dyn CommentAnnotator>) -> Self {
        Self {
            properties,
            comments,
        }
    }

    /// Resolve one setting: table override first, plugin default only
    /// when the table defines nothing at all
    fn resolve<'a>(
        &'a self,
        table: &'a dyn TableConfiguration,
        setting: CacheSetting,
    ) -> Option<&'a str> {
        table
            .property(setting.config_key())
            .or_else(|| self.properties.get(setting.config_key()))
    }
}

impl SqlMapPlugin for CachePlugin {
    fn validate(&self, _warnings: &mut Vec<String>) -> bool {
        // Any subset of the cache_* properties is acceptable, including none.
        true
    }

    fn sql_map_document_generated(
        &self,
        document: &mut Document,
        table: &dyn TableConfiguration,
    ) -> Result<()> {
        let mut element = XmlElement::new(Self::ELEMENT_NAME);
        self.comments.annotate(&mut element);

        for setting in CacheSetting::ALL {
            if let Some(value) = self.resolve(table, setting) {
                if !value.is_empty() {
                    element.add_attribute(Attribute::new(setting.attribute_name(), value));
                }
            }
        }

        debug!(
            table = table.name(),
            attributes = element.attributes().len(),
            "attached cache element to sqlMap document"
        );

        document.root_mut().add_element(element);
        Ok(())
    }
}
