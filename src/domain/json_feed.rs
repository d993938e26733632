use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Version URL written by the normalizer and the encoder.
pub const JSON_FEED_VERSION_1_1: &str = "https://jsonfeed.org/version/1.1";

/// Canonical feed representation, modelled on JSON Feed 1.1.
///
/// Every field is optional: syndication data in the wild is partial, and an
/// absent value must stay distinguishable from an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonFeed {
    pub version: Option<String>,
    pub title: Option<String>,
    pub home_page_url: Option<Url>,
    pub feed_url: Option<Url>,
    pub description: Option<String>,
    /// Note for people reading the raw JSON; feed readers ignore it.
    pub user_comment: Option<String>,
    /// Next page of items. Not checked against `feed_url`.
    pub next_url: Option<Url>,
    pub icon: Option<Url>,
    pub favicon: Option<Url>,
    pub authors: Option<Vec<JsonFeedAuthor>>,
    /// RFC 5646 language tag, e.g. `en` or `en-US`.
    pub language: Option<String>,
    pub expired: Option<bool>,
    pub hubs: Option<Vec<JsonFeedHub>>,
    pub items: Option<Vec<JsonFeedItem>>,
}

impl JsonFeed {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(Untitled)")
    }

    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }
}

/// A single entry of a [`JsonFeed`].
///
/// `content_html` and `content_text` are filled exclusively by the normalizer,
/// but nothing stops a decoded document from carrying both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonFeedItem {
    pub id: Option<String>,
    pub url: Option<Url>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content_html: Option<String>,
    pub content_text: Option<String>,
    pub date_published: Option<DateTime<Utc>>,
    pub authors: Option<Vec<JsonFeedAuthor>>,
    pub attachments: Option<Vec<JsonFeedAttachment>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonFeedAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}

impl JsonFeedAuthor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: None,
        }
    }
}

/// Real-time notification endpoint (WebSub, RSS cloud).
///
/// `url` is kept as text: an RSS cloud endpoint is `domain[:port][path]`
/// with no scheme, which is not an absolute URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonFeedHub {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub hub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonFeedAttachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_with_title() {
        let feed = JsonFeed {
            title: Some("My Feed".into()),
            ..Default::default()
        };
        assert_eq!(feed.display_title(), "My Feed");
    }

    #[test]
    fn test_display_title_without_title() {
        assert_eq!(JsonFeed::default().display_title(), "(Untitled)");
    }

    #[test]
    fn test_item_count() {
        let mut feed = JsonFeed::default();
        assert_eq!(feed.item_count(), 0);

        feed.items = Some(vec![JsonFeedItem::default(), JsonFeedItem::default()]);
        assert_eq!(feed.item_count(), 2);
    }

    #[test]
    fn test_named_author_has_no_url() {
        let author = JsonFeedAuthor::named("Alice");
        assert_eq!(author.name.as_deref(), Some("Alice"));
        assert!(author.url.is_none());
    }
}
