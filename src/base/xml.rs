//! Owned XML element tree.
//!
//! Both source dialects (XMI object graphs and GraphML diagrams) are read into
//! this small tree first. It keeps element names with their prefixes, the
//! attributes in document order and text nodes, which is everything the
//! readers query.
//!
//! ```text
//! XmlDocument
//! └── root: XmlElement
//!     ├── name: "graphml"
//!     ├── attributes: [(key, value)]
//!     └── children: [Element | Text]
//! ```

use std::borrow::Cow;
use std::io::BufRead;

use encoding_rs::{Encoding, UTF_8};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

/// Error raised while reading an XML document.
#[derive(Debug, Error)]
#[error("XML parse error at position {position}: {message}")]
pub struct XmlError {
    pub position: u64,
    pub message: String,
}

/// A child of an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with its attributes and children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Full tag name including the prefix (`y:ShapeNode`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag name without the prefix (`ShapeNode`).
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// Attribute value by exact key (`xmi:id`, `type`).
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute value by exact key, ignoring blank values.
    pub fn attr_non_empty(&self, key: &str) -> Option<&str> {
        self.attr(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.iter().any(|(k, _)| k == key)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|c| match c {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// Direct child elements with the given local name.
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |e| e.local_name() == local)
    }

    /// First direct child element with the given local name.
    pub fn child<'a>(&'a self, local: &'a str) -> Option<&'a XmlElement> {
        self.children_named(local).next()
    }

    /// All descendant elements in document order (self excluded).
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self, None)
    }

    /// Descendant elements in document order, not entering (nor yielding)
    /// elements for which `stop` holds.
    pub fn descendants_until<'a>(
        &'a self,
        stop: &'a dyn Fn(&XmlElement) -> bool,
    ) -> Descendants<'a> {
        Descendants::new(self, Some(stop))
    }

    /// First descendant with the given local name.
    pub fn find(&self, local: &str) -> Option<&XmlElement> {
        self.descendants().find(|e| e.local_name() == local)
    }

    /// Concatenated text of this element and all of its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &XmlElement, out: &mut String) {
    for child in &element.children {
        match child {
            XmlNode::Text(t) => out.push_str(t),
            XmlNode::Element(e) => collect_text(e, out),
        }
    }
}

/// Strip the namespace prefix of a qualified XML name.
pub fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

/// Pre-order iterator over descendant elements.
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
    stop: Option<&'a dyn Fn(&XmlElement) -> bool>,
}

impl<'a> Descendants<'a> {
    fn new(root: &'a XmlElement, stop: Option<&'a dyn Fn(&XmlElement) -> bool>) -> Self {
        let mut stack: Vec<&'a XmlElement> = root.elements().collect();
        stack.reverse();
        Self { stack, stop }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.stack.pop()?;
            if self.stop.is_some_and(|stop| stop(next)) {
                continue;
            }
            let start = self.stack.len();
            self.stack.extend(next.elements());
            self.stack[start..].reverse();
            return Some(next);
        }
    }
}

/// A parsed XML document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Read a document from bytes.
    ///
    /// Whitespace-only text between elements is dropped; all other text is
    /// kept verbatim so that multi-line labels survive.
    pub fn parse(input: &[u8]) -> Result<Self, XmlError> {
        let text = decode_document(input)?;
        let mut reader = Reader::from_reader(text.as_bytes());
        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let event = reader.read_event_into(&mut buf).map_err(|e| XmlError {
                position: reader.error_position() as u64,
                message: e.to_string(),
            })?;
            let position = reader.buffer_position() as u64;
            match event {
                Event::Start(ref e) => {
                    stack.push(element_from_start(e, position)?);
                }
                Event::Empty(ref e) => {
                    let element = element_from_start(e, position)?;
                    attach(&mut stack, &mut root, element, position)?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| XmlError {
                        position,
                        message: "unbalanced end tag".to_string(),
                    })?;
                    attach(&mut stack, &mut root, element, position)?;
                }
                Event::Text(ref t) => {
                    let text = t.unescape().map_err(|e| XmlError {
                        position,
                        message: e.to_string(),
                    })?;
                    push_text(&mut stack, &text);
                }
                Event::CData(t) => {
                    let bytes = t.into_inner();
                    push_text(&mut stack, &String::from_utf8_lossy(&bytes));
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(XmlError {
                position: reader.buffer_position() as u64,
                message: "unexpected end of document".to_string(),
            });
        }
        root.map(|root| Self { root }).ok_or_else(|| XmlError {
            position: 0,
            message: "document has no root element".to_string(),
        })
    }
}

/// Decode `input` to UTF-8 text.
///
/// A byte order mark wins over the declaration; without either the
/// document is UTF-8. The returned text still carries the original
/// declaration.
pub fn decode_document(input: &[u8]) -> Result<Cow<'_, str>, XmlError> {
    let encoding = match Encoding::for_bom(input) {
        Some((encoding, _)) => encoding,
        None => declared_encoding(input)?,
    };
    let (text, used, had_errors) = encoding.decode(input);
    if had_errors {
        return Err(XmlError {
            position: 0,
            message: format!("document is not valid {}", used.name()),
        });
    }
    Ok(text)
}

/// Encoding named by the XML declaration, UTF-8 when there is none.
fn declared_encoding(input: &[u8]) -> Result<&'static Encoding, XmlError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let label = loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Decl(decl)) => match decl.encoding() {
                Some(Ok(label)) => break label.into_owned(),
                _ => return Ok(UTF_8),
            },
            Ok(Event::Text(_)) => {}
            _ => return Ok(UTF_8),
        }
        buf.clear();
    };
    // A UTF-16 label on a document readable as ASCII is not UTF-16.
    Encoding::for_label(&label)
        .map(Encoding::output_encoding)
        .ok_or_else(|| XmlError {
            position: 0,
            message: format!(
                "unsupported document encoding '{}'",
                String::from_utf8_lossy(&label)
            ),
        })
}

/// Stream `input` until `accept` holds for an event, without building a tree.
///
/// Returns `Ok(false)` when the document ends first.
pub fn find_event<R: BufRead>(
    input: R,
    mut accept: impl FnMut(&Event<'_>) -> bool,
) -> Result<bool, XmlError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| XmlError {
            position: reader.error_position() as u64,
            message: e.to_string(),
        })?;
        if let Event::Eof = event {
            return Ok(false);
        }
        if accept(&event) {
            return Ok(true);
        }
        buf.clear();
    }
}

/// Unescaped value of attribute `key` on a streamed start tag.
pub fn start_attr(start: &BytesStart<'_>, key: &str) -> Option<String> {
    start
        .try_get_attribute(key)
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// Local name of a streamed start tag.
pub fn start_local_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn element_from_start(e: &BytesStart<'_>, position: u64) -> Result<XmlElement, XmlError> {
    let malformed = |message: String| XmlError { position, message };
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|err| malformed(format!("Invalid tag name: {err}")))?
        .to_string();
    let mut attributes = Vec::new();
    for attr_result in e.attributes() {
        let attr = attr_result.map_err(|err| malformed(format!("Attribute error: {err}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| malformed(format!("Attribute key error: {err}")))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|err| malformed(format!("Attribute value error: {err}")))?
            .to_string();
        attributes.push((key, value));
    }
    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
    position: u64,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(XmlError {
                position,
                message: "multiple root elements".to_string(),
            });
        }
    }
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str) {
    if text.trim().is_empty() {
        return;
    }
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Text(text.to_string()));
    }
}
