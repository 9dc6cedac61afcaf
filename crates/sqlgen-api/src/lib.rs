//! Host contract surface for sqlgen plugins
//!
//! Defines the boundary between the sqlgen generator engine and its
//! extension units: the XML DOM that generated mapping documents are
//! built from, the port traits plugins consume, and the property store
//! that plugin-level configuration values are resolved against.
//!
//! ## Architecture
//!
//! Ports define the contracts the host must implement. This follows the
//! Dependency Inversion Principle:
//! - Plugins depend only on the interfaces in this crate
//! - The generator engine implements them and drives the lifecycle
//!
//! The engine itself (document parsing, table introspection, comment
//! text policy, configuration loading) lives in the host and is not
//! part of this crate.

pub mod error;
pub mod ports;
pub mod properties;
pub mod xml;

pub use error::{Error, Result};
pub use ports::{CommentAnnotator, NullCommentAnnotator, SqlMapPlugin, TableConfiguration};
pub use properties::PropertyStore;
pub use xml::{Attribute, Document, XmlElement, XmlNode};
