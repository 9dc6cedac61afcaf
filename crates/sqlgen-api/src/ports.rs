//! Port interfaces between the generator host and its plugins
//!
//! The host implements these contracts; plugins only consume them. This
//! keeps extension units compilable and testable without the engine.

use crate::error::Result;
use crate::xml::{Document, XmlElement};

/// Comment generation capability supplied by the host
///
/// Decorates a freshly created element with generated comment nodes.
/// The annotation policy (wording, regeneration warnings, suppression)
/// belongs entirely to the host; plugins call this exactly once per
/// element they create and never inspect the result.
pub trait CommentAnnotator: Send + Sync + std::fmt::Debug {
    /// Add generated comments to the element
    fn annotate(&self, element: &mut XmlElement);
}

/// No-op annotator for hosts that suppress comments and for testing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCommentAnnotator;

impl CommentAnnotator for NullCommentAnnotator {
    fn annotate(&self, _element: &mut XmlElement) {}
}

/// Per-table configuration supplied by the host's table introspection
pub trait TableConfiguration: Send + Sync {
    /// Fully qualified table name, used for log context
    fn name(&self) -> &str;

    /// Look up a table-level property override by key
    fn property(&self, key: &str) -> Option<&str>;
}

/// Lifecycle contract for sqlMap generation plugins
///
/// The host validates each configured plugin once at startup, then
/// invokes the generation hooks as artifacts are produced, sequentially
/// and at most once per table.
pub trait SqlMapPlugin: Send + Sync {
    /// Validate plugin configuration at startup
    ///
    /// Push human-readable messages into `warnings` for anything
    /// questionable; return false to reject the configuration outright.
    fn validate(&self, warnings: &mut Vec<String>) -> bool;

    /// Called after the sqlMap document for a table has been generated
    ///
    /// The document is exclusively owned by the host for the duration of
    /// the call; mutations are applied in place.
    fn sql_map_document_generated(
        &self,
        document: &mut Document,
        table: &dyn TableConfiguration,
    ) -> Result<()>;
}
