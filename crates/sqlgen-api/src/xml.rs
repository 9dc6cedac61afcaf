//! XML DOM value objects for generated mapping documents
//!
//! A minimal tree the generator builds sqlMap documents from. Elements
//! own their attributes and child nodes; both preserve insertion order.
//! Rendering is two-space indented, empty elements self-close, and
//! attribute values are emitted verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A name/value attribute pair on an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name as it appears in the output document
    pub name: String,

    /// Attribute value, emitted verbatim
    pub value: String,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum XmlNode {
    /// Nested element
    Element(XmlElement),
    /// Raw text content
    Text(String),
    /// Comment, rendered as `<!-- ... -->`
    Comment(String),
}

/// An element with a tag name, attributes and child nodes
///
/// # Example
///
/// ```
/// use sqlgen_api::xml::{Attribute, XmlElement};
///
/// let mut element = XmlElement::new("cache");
/// element.add_attribute(Attribute::new("size", "512"));
///
/// assert_eq!(element.to_string(), r#"<cache size="512"/>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlElement {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element with the given tag name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name of this element
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in attachment order
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Child nodes in insertion order
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Attach an attribute; attachment order is preserved in the output
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Look up an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Append a child node
    pub fn add_node(&mut self, node: XmlNode) {
        self.children.push(node);
    }

    /// Append a nested child element
    pub fn add_element(&mut self, element: XmlElement) {
        self.children.push(XmlNode::Element(element));
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        write!(f, "{pad}<{}", self.name)?;
        for attribute in &self.attributes {
            write!(f, " {}=\"{}\"", attribute.name, attribute.value)?;
        }
        if self.children.is_empty() {
            return write!(f, "/>");
        }
        writeln!(f, ">")?;
        for child in &self.children {
            match child {
                XmlNode::Element(element) => element.fmt_indented(f, indent + 1)?,
                XmlNode::Text(text) => write!(f, "{pad}  {text}")?,
                XmlNode::Comment(text) => write!(f, "{pad}  <!-- {text} -->")?,
            }
            writeln!(f)?;
        }
        write!(f, "{pad}</{}>", self.name)
    }
}

impl fmt::Display for XmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// A generated mapping document: an XML declaration plus one root element
///
/// The host owns the document for the whole generation run; plugins only
/// see it through `&mut` during their hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    root: XmlElement,
}

impl Document {
    /// Create a document with the given root element
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    /// Root element, read-only
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Root element, for tree mutation
    pub fn root_mut(&mut self) -> &mut XmlElement {
        &mut self.root
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        self.root.fmt(f)
    }
}
