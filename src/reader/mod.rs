//! Turns raw feed bytes into a [`Feed`].
//!
//! JSON Feed documents go through [`JsonFeedCodec::decode`]; Atom and RSS
//! documents are read with `quick-xml` into the source trees in
//! [`crate::domain`].

mod atom;
mod rss;
mod xml;

use chrono::{DateTime, Utc};

use crate::app::{FeedError, Result};
use crate::codec::JsonFeedCodec;
use crate::domain::Feed;

pub use xml::MAX_XML_DEPTH;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Detects the format of `bytes` and parses it.
pub fn read_feed(bytes: &[u8], codec: &JsonFeedCodec) -> Result<Feed> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let feed = match bytes.iter().copied().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => Feed::Json(codec.decode(bytes)?),
        Some(b'<') => read_xml(bytes)?,
        _ => {
            return Err(FeedError::UnsupportedFormat(
                "input is neither XML nor a JSON object".into(),
            ))
        }
    };

    tracing::debug!(format = feed.format_name(), "Read feed");
    Ok(feed)
}

fn read_xml(bytes: &[u8]) -> Result<Feed> {
    let root = xml::parse_document(bytes)?;

    match root.name.as_str() {
        "rss" => Ok(Feed::Rss(rss::rss_from_element(&root)?)),
        "feed" => Ok(Feed::Atom(atom::atom_from_element(&root))),
        other => Err(FeedError::UnsupportedFormat(format!(
            "unknown root element <{}>",
            other
        ))),
    }
}

/// Titles are often double-escaped in the wild (`&amp;amp;`).
fn decode_title(title: String) -> String {
    html_escape::decode_html_entities(&title).into_owned()
}

fn parse_rfc2822(text: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc2822(text.trim()) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!(date = text, error = %e, "Dropping unparseable RFC 2822 date");
            None
        }
    }
}

fn parse_rfc3339(text: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(text.trim()) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!(date = text, error = %e, "Dropping unparseable RFC 3339 date");
            None
        }
    }
}
