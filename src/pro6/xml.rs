//! Minimal XML element tree for ProPresenter 6 documents.
//!
//! Values are stored raw and escaped exactly once, when the tree is written.

use crate::common::Result;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// XML declaration written at the top of every document.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// A node inside an element.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// `<array rvXMLIvarName="...">`, the container ProPresenter uses for lists.
    pub fn array(ivar: &str) -> Self {
        Self::new("array").attr("rvXMLIvarName", ivar)
    }

    /// Add an attribute (builder style).
    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attributes.push((name, value.to_string()));
        self
    }

    /// Add a child element (builder style).
    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Add a text node (builder style).
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Append a child element.
    pub fn push(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Serialize as a standalone document with an XML declaration.
    pub fn to_document(&self) -> Result<String> {
        let mut xml = String::with_capacity(8192);
        xml.push_str(XML_DECLARATION);
        xml.push('\n');
        self.write_to(&mut xml, 0)?;
        xml.push('\n');
        Ok(xml)
    }

    fn write_to(&self, xml: &mut String, depth: usize) -> Result<()> {
        indent(xml, depth);
        xml.push('<');
        xml.push_str(self.name);
        for (name, value) in &self.attributes {
            write!(xml, r#" {}="{}""#, name, escape_xml(value))?;
        }

        if self.children.is_empty() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');

        let only_text = self.children.iter().all(|c| matches!(c, XmlNode::Text(_)));
        for child in &self.children {
            match child {
                XmlNode::Text(text) => xml.push_str(&escape_xml(text)),
                XmlNode::Element(element) => {
                    xml.push('\n');
                    element.write_to(xml, depth + 1)?;
                },
            }
        }
        if !only_text {
            xml.push('\n');
            indent(xml, depth);
        }
        xml.push_str("</");
        xml.push_str(self.name);
        xml.push('>');
        Ok(())
    }
}

fn indent(xml: &mut String, depth: usize) {
    for _ in 0..depth {
        xml.push_str("  ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let xml = XmlElement::array("cues").to_document().unwrap();
        assert!(xml.ends_with("<array rvXMLIvarName=\"cues\"/>\n"));
        assert!(xml.starts_with(XML_DECLARATION));
    }

    #[test]
    fn test_text_stays_inline() {
        let el = XmlElement::new("NSString").attr("rvXMLIvarName", "RTFData").text("e1xydGYx");
        let xml = el.to_document().unwrap();
        assert!(xml.contains("<NSString rvXMLIvarName=\"RTFData\">e1xydGYx</NSString>"));
    }

    #[test]
    fn test_attributes_and_text_are_escaped() {
        let el = XmlElement::new("doc")
            .attr("title", "Jesus & \"Friend\"")
            .child(XmlElement::new("t").text("<b>"));
        let xml = el.to_document().unwrap();
        assert!(xml.contains("title=\"Jesus &amp; &quot;Friend&quot;\""));
        assert!(xml.contains("<t>&lt;b&gt;</t>"));
    }

    #[test]
    fn test_nested_indentation() {
        let el = XmlElement::new("a").child(XmlElement::new("b").child(XmlElement::new("c")));
        assert_eq!(el.to_document().unwrap(), format!("{}\n<a>\n  <b>\n    <c/>\n  </b>\n</a>\n", XML_DECLARATION));
    }
}
