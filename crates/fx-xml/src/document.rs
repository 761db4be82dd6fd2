//! In-memory element tree of a flowsheet document.
//!
//! The parser keeps the whole document because nodes and edges are built in
//! two passes over loosely related sections. The tree is read-only once built.

use std::str::{self, FromStr};

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

use crate::error::{ParseError, ParseResult};

/// One XML element with its attributes, child elements and text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Direct children called `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First direct child called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text content with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Value of a named field, stored either as an attribute or as the text
    /// of a direct child element. Blank values count as missing.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.attr(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .or_else(|| {
                self.child(name)
                    .map(Element::text)
                    .filter(|v| !v.is_empty())
            })
    }

    /// First descendant called `name`, searched breadth-first.
    pub fn find(&self, name: &str) -> Option<&Element> {
        let mut level: Vec<&Element> = self.children.iter().collect();
        while !level.is_empty() {
            if let Some(found) = level.iter().copied().find(|e| e.name == name) {
                return Some(found);
            }
            level = level.iter().flat_map(|e| e.children.iter()).collect();
        }
        None
    }
}

/// A parsed flowsheet document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse a complete XML document.
    pub fn parse(xml: &str) -> ParseResult<Self> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => stack.push(open(&e)?),
                Event::Empty(e) => {
                    let element = open(&e)?;
                    close(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        ParseError::Structure("closing tag without opening tag".into())
                    })?;
                    close(&mut stack, &mut root, element)?;
                }
                Event::Text(t) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&t.decode()?);
                    }
                }
                Event::CData(c) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&c.decode()?);
                    }
                }
                Event::GeneralRef(r) => {
                    let Some(top) = stack.last_mut() else {
                        continue;
                    };
                    if let Some(ch) = r.resolve_char_ref()? {
                        top.text.push(ch);
                    } else {
                        let entity = r.decode()?;
                        let resolved = resolve_predefined_entity(&entity).ok_or_else(|| {
                            ParseError::Structure(format!("unknown entity '&{entity};'"))
                        })?;
                        top.text.push_str(resolved);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(ParseError::Structure(format!(
                "element '{}' is never closed",
                open.name
            )));
        }
        root.map(|root| Self { root })
            .ok_or_else(|| ParseError::Structure("document has no root element".into()))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The root if it is called `name`, else the first descendant that is.
    pub fn container(&self, name: &str) -> Option<&Element> {
        if self.root.name == name {
            Some(&self.root)
        } else {
            self.root.find(name)
        }
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn open(e: &BytesStart<'_>) -> ParseResult<Element> {
    let name = str::from_utf8(e.local_name().as_ref())?.to_string();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = str::from_utf8(attr.key.local_name().as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name,
        attributes,
        ..Element::default()
    })
}

fn close(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> ParseResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(ParseError::Structure(format!(
                "second root element '{}'",
                element.name
            )));
        }
    }
    Ok(())
}
