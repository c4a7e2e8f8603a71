//! Navigable XML element tree.
//!
//! The decoder needs only a small capability from XML: ordered child lookup
//! by tag and attribute lookup by name. This module builds an owned tree from
//! `quick-xml` events and exposes exactly that. Names are stored by local
//! name, so `xsi:type` is looked up as `type` and the default HL7 namespace
//! is transparent. Namespace declarations are not kept as attributes.
//!
//! Element text is the concatenation of its character data with character
//! and predefined entity references resolved, trimmed at both ends. Anything
//! but whitespace or comments after the root element is an error.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

/// Errors raised while building the element tree.
#[derive(Debug, Error)]
pub enum XmlError {
    /// Syntax error reported by the XML parser.
    #[error("{0}")]
    Syntax(#[from] quick_xml::Error),

    /// Input is not valid UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Input ended inside an element.
    #[error("element <{0}> is never closed")]
    Unclosed(String),

    /// Input has no root element.
    #[error("document has no root element")]
    Empty,

    /// Element or text found after the root element closed.
    #[error("content after the root element: {0}")]
    TrailingContent(String),
}

/// One element with its attributes, child elements and text content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
    text: String,
}

impl XmlElement {
    /// Parse a document and return its root element.
    pub fn parse(xml: &str) -> Result<Self, XmlError> {
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
        let mut reader = Reader::from_str(xml);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    if let Some(mut element) = stack.pop() {
                        element.trim_text();
                        attach(&mut stack, &mut root, element)?;
                    }
                }
                Event::Text(text) => {
                    let raw = String::from_utf8_lossy(&text);
                    let text = quick_xml::escape::unescape(&raw).map_err(quick_xml::Error::from)?;
                    push_text(&mut stack, root.as_ref(), &text)?;
                }
                Event::GeneralRef(reference) => {
                    let raw = format!("&{};", String::from_utf8_lossy(&reference));
                    let text = quick_xml::escape::unescape(&raw).map_err(quick_xml::Error::from)?;
                    push_text(&mut stack, root.as_ref(), &text)?;
                }
                Event::CData(data) => {
                    push_text(&mut stack, root.as_ref(), &String::from_utf8_lossy(&data))?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(XmlError::Unclosed(open.name));
        }
        root.ok_or(XmlError::Empty)
    }

    /// Parse a document from raw bytes.
    pub fn parse_bytes(bytes: Vec<u8>) -> Result<Self, XmlError> {
        let xml = String::from_utf8(bytes)?;
        Self::parse(&xml)
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            if attribute.key.as_namespace_binding().is_some() {
                continue;
            }
            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let raw = String::from_utf8_lossy(&attribute.value);
            let value = quick_xml::escape::unescape(&raw)
                .map_err(quick_xml::Error::from)?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    fn trim_text(&mut self) {
        let trimmed = self.text.trim();
        if trimmed.len() != self.text.len() {
            self.text = trimmed.to_string();
        }
    }

    /// Local element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Direct children with the given tag, in document order.
    pub fn children<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == tag)
    }

    /// First direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == tag)
    }

    /// All direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter()
    }

    /// This element and every descendant with the given tag, depth-first in
    /// document order.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a XmlElement> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a XmlElement>) {
        if self.name == tag {
            found.push(self);
        }
        for child in &self.children {
            child.collect(tag, found);
        }
    }

    /// Text content directly inside this element.
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => {
            return Err(XmlError::TrailingContent(format!("<{}>", element.name)));
        }
        None => *root = Some(element),
    }
    Ok(())
}

/// Append character data to the open element. Chunks split by comments,
/// processing instructions or references are joined without a separator.
fn push_text(
    stack: &mut [XmlElement],
    root: Option<&XmlElement>,
    text: &str,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(current) => current.text.push_str(text),
        None if root.is_some() && !text.trim().is_empty() => {
            return Err(XmlError::TrailingContent(text.trim().to_string()));
        }
        None => {}
    }
    Ok(())
}
