//! Parsed Atom 1.0 documents.
//!
//! Values are kept as the text found in the document; interpretation (URL
//! parsing, length parsing) happens in the normalizer.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomFeed {
    pub title: Option<String>,
    pub subtitle: Option<AtomText>,
    pub links: Vec<AtomLink>,
    pub authors: Vec<AtomPerson>,
    pub entries: Vec<AtomEntry>,
    /// `xml:lang` of the root element.
    pub language: Option<String>,
    /// Small square image (`<icon>`).
    pub icon: Option<String>,
    /// Larger image (`<logo>`).
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<AtomText>,
    pub links: Vec<AtomLink>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

/// A text construct such as `<subtitle type="html">...</subtitle>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomText {
    pub value: Option<String>,
    pub text_type: Option<String>,
}

impl AtomText {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            text_type: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomLink {
    pub rel: Option<String>,
    pub href: Option<String>,
    pub link_type: Option<String>,
    /// Raw `length` attribute.
    pub length: Option<String>,
}

impl AtomLink {
    pub fn new(rel: Option<&str>, href: &str) -> Self {
        Self {
            rel: rel.map(String::from),
            href: Some(href.to_string()),
            link_type: None,
            length: None,
        }
    }

    /// `rel` absent means `alternate` per RFC 4287.
    pub fn is_alternate(&self) -> bool {
        matches!(self.rel.as_deref(), None | Some("alternate"))
    }

    pub fn has_rel(&self, rel: &str) -> bool {
        self.rel.as_deref() == Some(rel)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomPerson {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub email: Option<String>,
}
