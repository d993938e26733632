//! Parsed RSS 2.0 documents.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RssFeed {
    pub title: Option<String>,
    /// Channel `<link>`: the site the channel belongs to.
    pub link: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub web_master: Option<String>,
    pub managing_editor: Option<String>,
    pub cloud: Option<RssCloud>,
    pub image: Option<RssImage>,
    pub items: Vec<RssItem>,
}

/// `<cloud>` element, the RSS flavour of a notification hub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RssCloud {
    pub domain: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub register_procedure: Option<String>,
    /// `protocol` attribute, e.g. `xml-rpc`, `soap` or `http-post`.
    pub protocol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RssImage {
    pub url: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RssItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub categories: Vec<RssCategory>,
    pub enclosure: Option<RssEnclosure>,
    pub guid: Option<RssGuid>,
    pub pub_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RssCategory {
    pub value: Option<String>,
    pub domain: Option<String>,
}

impl RssCategory {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            domain: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RssEnclosure {
    pub url: Option<String>,
    /// Raw `length` attribute.
    pub length: Option<String>,
    pub enclosure_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RssGuid {
    pub value: Option<String>,
    pub is_perma_link: Option<bool>,
}

impl RssGuid {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            is_perma_link: None,
        }
    }
}
