//! In-memory XML tree for bill documents.
//!
//! Parsing is strict: anything the XML layer rejects, or a tree that does not
//! close cleanly, is reported as [`BillhashError::Parse`] rather than yielding
//! a partial document. Text is kept exactly as written (no trimming), since
//! whitespace between inline tags is part of a paragraph's text.
//!
//! Internal general entities declared in the DOCTYPE (`<!ENTITY sect
//! "Section">`) are expanded in text and attribute values alongside the
//! predefined ones. Parameter and external entities are not supported.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::BillhashError;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Character data or a CDATA section, with references already resolved.
    Text(String),
    /// Comments and processing instructions.
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Qualified name as written, prefix included (e.g. `dc:title`).
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by its exact (qualified) name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// All elements named `name` in this subtree, in document order.
    ///
    /// Includes `self` when it matches, and matches nested inside other
    /// matches.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        collect_named(self, name, &mut found);
        found
    }
}

fn collect_named<'a>(el: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
    if el.name == name {
        found.push(el);
    }
    for child in el.child_elements() {
        collect_named(child, name, found);
    }
}

/// A parsed document together with the identifier it was loaded from.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    root: Element,
}

impl Document {
    /// Parse XML text. `source` names the document in error messages.
    pub fn parse(source: impl Into<String>, xml: &str) -> Result<Self, BillhashError> {
        let source = source.into();
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
        let root = parse_tree(&source, xml)?;
        log::debug!("{source}: parsed root <{}>", root.name);
        Ok(Document { source, root })
    }

    pub fn parse_bytes(source: impl Into<String>, bytes: &[u8]) -> Result<Self, BillhashError> {
        let source = source.into();
        match std::str::from_utf8(bytes) {
            Ok(xml) => Document::parse(source, xml),
            Err(e) => Err(parse_error(
                &source,
                Some(e.valid_up_to() as u64),
                "document is not valid UTF-8",
            )),
        }
    }

    pub fn from_reader<R: std::io::Read>(
        source: impl Into<String>,
        mut reader: R,
    ) -> Result<Self, BillhashError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Document::parse_bytes(source, &bytes)
    }

    pub fn open(path: &Path) -> Result<Self, BillhashError> {
        let bytes = std::fs::read(path)?;
        Document::parse_bytes(path.display().to_string(), &bytes)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Every element with the given qualified name, in document order.
    pub fn elements_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        self.root.descendants_named(name)
    }
}

fn parse_error(source: &str, position: Option<u64>, message: impl Into<String>) -> BillhashError {
    BillhashError::Parse {
        document: source.to_string(),
        position,
        message: message.into(),
    }
}

fn parse_tree(source: &str, xml: &str) -> Result<Element, BillhashError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut entities: HashMap<String, String> = HashMap::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| parse_error(source, Some(reader.error_position()), e.to_string()))?;
        let position = reader.buffer_position();

        match event {
            Event::Start(e) => {
                if open.is_empty() && root.is_some() {
                    return Err(parse_error(source, Some(position), "junk after document element"));
                }
                open.push(start_element(source, position, &e, &entities)?);
            }
            Event::Empty(e) => {
                let el = start_element(source, position, &e, &entities)?;
                close_element(source, position, el, &mut open, &mut root)?;
            }
            Event::End(_) => {
                let el = open
                    .pop()
                    .ok_or_else(|| parse_error(source, Some(position), "unexpected end tag"))?;
                close_element(source, position, el, &mut open, &mut root)?;
            }
            Event::Text(e) => {
                let text = e
                    .unescape_with(|name| resolve_entity(&entities, name))
                    .map_err(|err| parse_error(source, Some(position), err.to_string()))?;
                push_text(source, position, text.into_owned(), &mut open)?;
            }
            Event::CData(e) => {
                let text = std::str::from_utf8(&e)
                    .map_err(|err| parse_error(source, Some(position), err.to_string()))?;
                push_text(source, position, text.to_string(), &mut open)?;
            }
            Event::DocType(e) => {
                let decl = std::str::from_utf8(&e)
                    .map_err(|err| parse_error(source, Some(position), err.to_string()))?;
                entities = entity_declarations(decl);
            }
            Event::Comment(_) | Event::PI(_) => {
                if let Some(parent) = open.last_mut() {
                    parent.children.push(Node::Other);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(parse_error(
            source,
            Some(reader.buffer_position()),
            format!("unclosed element <{}>", unclosed.name),
        ));
    }

    root.ok_or_else(|| parse_error(source, None, "no element found"))
}

fn start_element(
    source: &str,
    position: u64,
    e: &BytesStart,
    entities: &HashMap<String, String>,
) -> Result<Element, BillhashError> {
    let mut el = Element::new(String::from_utf8_lossy(e.name().as_ref()));
    for attr in e.attributes() {
        let attr = attr.map_err(|err| parse_error(source, Some(position), err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value_with(|name| resolve_entity(entities, name))
            .map_err(|err| parse_error(source, Some(position), err.to_string()))?;
        el.attributes.push((key, value.into_owned()));
    }
    Ok(el)
}

fn resolve_entity<'a>(entities: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    entities
        .get(name)
        .map(String::as_str)
        .or_else(|| resolve_predefined_entity(name))
}

/// Internal general entities from a DOCTYPE body.
///
/// The first declaration of a name wins. Character references in a value are
/// expanded; a value that refers to other entities is kept as written.
fn entity_declarations(doctype: &str) -> HashMap<String, String> {
    let mut entities = HashMap::new();
    let mut rest = doctype;
    while let Some(start) = rest.find("<!ENTITY") {
        rest = rest[start + "<!ENTITY".len()..].trim_start();
        if rest.starts_with('%') {
            continue;
        }
        let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();

        // SYSTEM / PUBLIC entities have no inline value.
        let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') else {
            continue;
        };
        let body = &rest[1..];
        let Some(end) = body.find(quote) else {
            break;
        };
        let raw = &body[..end];
        let value = unescape(raw).unwrap_or(Cow::Borrowed(raw)).into_owned();
        entities.entry(name.to_string()).or_insert(value);
        rest = &body[end + 1..];
    }
    entities
}

fn close_element(
    source: &str,
    position: u64,
    el: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), BillhashError> {
    match open.last_mut() {
        Some(parent) => parent.children.push(Node::Element(el)),
        None if root.is_some() => {
            return Err(parse_error(source, Some(position), "junk after document element"));
        }
        None => *root = Some(el),
    }
    Ok(())
}

fn push_text(
    source: &str,
    position: u64,
    text: String,
    open: &mut [Element],
) -> Result<(), BillhashError> {
    match open.last_mut() {
        Some(parent) => parent.children.push(Node::Text(text)),
        // Whitespace around the root element is not content.
        None if text.trim().is_empty() => {}
        None => {
            return Err(parse_error(source, Some(position), "text outside the document element"));
        }
    }
    Ok(())
}
