//! Conversion of any supported source feed into a [`JsonFeed`].
//!
//! Normalization never fails. A source field that cannot be interpreted (a
//! URL that does not parse, a non-numeric enclosure length) is left absent in
//! the output.

mod atom;
mod rss;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{Feed, JsonFeed};

/// Switches that restore the behaviour of the legacy converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
    /// Build Atom entries but never attach them to `items`.
    pub legacy_atom_items: bool,
    /// Take the RSS image as icon whenever `width == height`, which includes
    /// both dimensions being absent.
    pub legacy_icon_equality: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizerOptions,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: NormalizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    /// Converts `feed` into the canonical representation.
    ///
    /// Atom and RSS input always yields version 1.1. JSON Feed input is
    /// returned as is, including its own `version`.
    pub fn normalize(&self, feed: &Feed) -> JsonFeed {
        match feed {
            Feed::Atom(atom) => atom::normalize_atom(atom, &self.options),
            Feed::Rss(rss) => rss::normalize_rss(rss, &self.options),
            Feed::Json(json) => json.clone(),
        }
    }
}

impl Feed {
    /// Shorthand for [`Normalizer::normalize`] with default options.
    pub fn to_json_feed(&self) -> JsonFeed {
        Normalizer::new().normalize(self)
    }
}

fn parse_url(text: Option<&str>) -> Option<Url> {
    let text = text?;
    match Url::parse(text) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!(url = text, error = %e, "Dropping unparseable URL");
            None
        }
    }
}

/// Parses a textual length attribute. Anything but a non-negative integer is
/// treated as unknown.
pub fn parse_length(text: &str) -> Option<u64> {
    text.trim().parse().ok()
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AtomFeed, JsonFeedAuthor, JsonFeedItem, RssFeed, RssItem, JSON_FEED_VERSION_1_1,
    };

    #[test]
    fn test_parse_length_numeric() {
        assert_eq!(parse_length("12345"), Some(12345));
        assert_eq!(parse_length(" 42 "), Some(42));
    }

    #[test]
    fn test_parse_length_non_numeric() {
        assert_eq!(parse_length("unknown"), None);
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("-1"), None);
        assert_eq!(parse_length("12.5"), None);
    }

    #[test]
    fn test_parse_url_drops_invalid_text() {
        assert!(parse_url(None).is_none());
        assert!(parse_url(Some("")).is_none());
        assert!(parse_url(Some("not a url")).is_none());
        assert_eq!(
            parse_url(Some("https://example.com/a")).map(String::from),
            Some("https://example.com/a".to_string())
        );
    }

    #[test]
    fn test_json_input_is_identity() {
        let feed = JsonFeed {
            version: Some("https://jsonfeed.org/version/1".into()),
            title: Some("Already canonical".into()),
            authors: Some(vec![JsonFeedAuthor::named("Alice")]),
            items: Some(vec![JsonFeedItem {
                id: Some("1".into()),
                content_text: Some("Hi".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let normalized = Normalizer::new().normalize(&Feed::Json(feed.clone()));
        assert_eq!(normalized, feed);
    }

    #[test]
    fn test_xml_sources_get_version_1_1() {
        let normalizer = Normalizer::new();
        let atom = normalizer.normalize(&Feed::Atom(AtomFeed::default()));
        let rss = normalizer.normalize(&Feed::Rss(RssFeed::default()));

        assert_eq!(atom.version.as_deref(), Some(JSON_FEED_VERSION_1_1));
        assert_eq!(rss.version.as_deref(), Some(JSON_FEED_VERSION_1_1));
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let feed = Feed::Rss(RssFeed {
            title: Some("Feed".into()),
            items: vec![RssItem {
                description: Some("<b>bold</b>".into()),
                ..Default::default()
            }],
            ..Default::default()
        });

        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize(&feed), normalizer.normalize(&feed));
    }

    #[test]
    fn test_to_json_feed_uses_defaults() {
        let feed = Feed::Rss(RssFeed {
            title: Some("Feed".into()),
            ..Default::default()
        });
        assert_eq!(feed.to_json_feed(), Normalizer::new().normalize(&feed));
    }
}
