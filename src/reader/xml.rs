use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::app::{FeedError, Result};

/// Maximum element nesting accepted from a feed document.
pub const MAX_XML_DEPTH: usize = 64;

/// A minimal element tree. Names are kept qualified (`atom:link`, `xml:lang`)
/// so that foreign-namespace elements never shadow the format's own ones.
#[derive(Debug, Default)]
pub(super) struct Element {
    pub name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
    /// Raw inner markup, kept only for `type="xhtml"` text constructs.
    markup: Option<String>,
    markup_start: Option<usize>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Direct text content, `None` when empty.
    pub fn text(&self) -> Option<String> {
        let text = self.text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).and_then(Element::text)
    }

    /// Inner markup of an XHTML text construct, with the wrapping `<div>`
    /// removed when it is the only child.
    pub fn xhtml(&self) -> Option<String> {
        let markup = self.markup.as_deref()?.trim();
        let wrapped = self.children.len() == 1
            && self.text.trim().is_empty()
            && is_div(&self.children[0].name);

        let inner = match (wrapped, markup.find('>'), markup.rfind("</")) {
            (true, Some(open), Some(close)) if open < close => &markup[open + 1..close],
            // `<div/>`
            (true, Some(_), _) => "",
            _ => markup,
        };
        let inner = inner.trim();
        (!inner.is_empty()).then(|| inner.to_string())
    }
}

/// Text between the end of a start tag and the `</` of the end tag that
/// finishes at `end`.
fn inner_markup(bytes: &[u8], start: usize, end: usize) -> Option<String> {
    let scanned = bytes.get(start..end)?;
    let close = scanned.windows(2).rposition(|w| w == b"</")?;
    Some(String::from_utf8_lossy(&scanned[..close]).into_owned())
}

fn is_div(name: &str) -> bool {
    name == "div" || name.ends_with(":div")
}

/// Reads a whole document into an [`Element`] tree and returns its root.
pub(super) fn parse_document(bytes: &[u8]) -> Result<Element> {
    // quick-xml never expands <!ENTITY> declarations, so external entities in
    // a DOCTYPE are inert.
    // Text chunks are joined untrimmed; `Element::text` trims the result.
    let mut reader = Reader::from_reader(bytes);

    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if stack.len() >= MAX_XML_DEPTH {
                    return Err(FeedError::MaxDepthExceeded(MAX_XML_DEPTH));
                }
                let mut element = start_element(&e, &reader)?;
                if element.attr("type") == Some("xhtml") {
                    element.markup_start = Some(reader.buffer_position() as usize);
                }
                stack.push(element);
            }
            Ok(Event::Empty(e)) => {
                let element = start_element(&e, &reader)?;
                attach(element, &mut stack, &mut root);
            }
            Ok(Event::End(_)) => {
                if let Some(mut element) = stack.pop() {
                    if let Some(start) = element.markup_start.take() {
                        let end = reader.buffer_position() as usize;
                        element.markup = inner_markup(bytes, start, end);
                    }
                    attach(element, &mut stack, &mut root);
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(current) = stack.last_mut() {
                    let text = match t.unescape() {
                        Ok(text) => text,
                        // HTML entities such as &nbsp; are not XML, but show up in feeds.
                        Err(_) => {
                            let raw = String::from_utf8_lossy(&t).into_owned();
                            Cow::Owned(html_escape::decode_html_entities(&raw).into_owned())
                        }
                    };
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(c)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(FeedError::XmlParse(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| FeedError::XmlParse("document has no root element".into()))
}

fn start_element(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();

    for attr_result in start.attributes() {
        let attr = match attr_result {
            Ok(attr) => attr,
            Err(e) => {
                tracing::warn!(element = %name, error = %e, "Skipping malformed XML attribute");
                continue;
            }
        };
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .decode_and_unescape_value(reader.decoder())
            .map_err(|e| FeedError::XmlParse(e.to_string()))?;
        attributes.push((key, value.into_owned()));
    }

    Ok(Element {
        name,
        attributes,
        ..Default::default()
    })
}

fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}
