//! Unit tests for the XML DOM value objects

use sqlgen_api::{Attribute, Document, XmlElement, XmlNode};

#[test]
fn test_empty_element_self_closes() {
    let element = XmlElement::new("cache");
    assert_eq!(element.to_string(), "<cache/>");
}

#[test]
fn test_attribute_order_is_attachment_order() {
    let mut element = XmlElement::new("cache");
    element.add_attribute(Attribute::new("size", "512"));
    element.add_attribute(Attribute::new("type", "LRU"));
    element.add_attribute(Attribute::new("eviction", "FIFO"));

    let names: Vec<&str> = element
        .attributes()
        .iter()
        .map(|attribute| attribute.name.as_str())
        .collect();
    assert_eq!(names, vec!["size", "type", "eviction"]);
    assert_eq!(
        element.to_string(),
        r#"<cache size="512" type="LRU" eviction="FIFO"/>"#
    );
}

#[test]
fn test_attribute_lookup_by_name() {
    let mut element = XmlElement::new("cache");
    element.add_attribute(Attribute::new("size", "512"));

    assert_eq!(element.attribute("size"), Some("512"));
    assert_eq!(element.attribute("type"), None);
}

#[test]
fn test_attribute_values_emitted_verbatim() {
    let mut element = XmlElement::new("select");
    element.add_attribute(Attribute::new("resultMap", "BaseResultMap"));
    element.add_node(XmlNode::Text("select * from users".to_string()));

    let rendered = element.to_string();
    assert!(rendered.contains(r#"resultMap="BaseResultMap""#));
    assert!(rendered.contains("select * from users"));
}

#[test]
fn test_nested_element_rendering() {
    let mut root = XmlElement::new("sqlMap");
    root.add_attribute(Attribute::new("namespace", "UserMapper"));
    let mut cache = XmlElement::new("cache");
    cache.add_node(XmlNode::Comment("generated".to_string()));
    root.add_element(cache);

    let expected = "<sqlMap namespace=\"UserMapper\">\n  <cache>\n    <!-- generated -->\n  </cache>\n</sqlMap>";
    assert_eq!(root.to_string(), expected);
}

#[test]
fn test_document_rendering_includes_declaration() {
    let document = Document::new(XmlElement::new("sqlMap"));
    let rendered = document.to_string();
    assert!(rendered.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(rendered.ends_with("<sqlMap/>"));
}

#[test]
fn test_root_mut_allows_tree_append() {
    let mut document = Document::new(XmlElement::new("sqlMap"));
    document.root_mut().add_element(XmlElement::new("cache"));

    assert_eq!(document.root().children().len(), 1);
    match &document.root().children()[0] {
        XmlNode::Element(element) => assert_eq!(element.name(), "cache"),
        other => panic!("expected element child, got {other:?}"),
    }
}
