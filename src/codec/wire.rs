use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{JsonFeed, JsonFeedAttachment, JsonFeedAuthor, JsonFeedHub, JsonFeedItem};

/// On-the-wire layout of a feed object. `author` is the JSON Feed 1.0 field
/// and is only ever read.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct WireFeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_page_url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<JsonFeedAuthor>>,
    #[serde(default, skip_serializing)]
    pub author: Option<JsonFeedAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hubs: Option<Vec<JsonFeedHub>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<WireItem>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct WireItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<JsonFeedAuthor>>,
    #[serde(default, skip_serializing)]
    pub author: Option<JsonFeedAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<JsonFeedAttachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// 1.0 singular author overrides the 1.1 list.
fn merge_authors(
    authors: Option<Vec<JsonFeedAuthor>>,
    author: Option<JsonFeedAuthor>,
) -> Option<Vec<JsonFeedAuthor>> {
    match author {
        Some(author) => Some(vec![author]),
        None => authors,
    }
}

impl From<WireFeed> for JsonFeed {
    fn from(wire: WireFeed) -> Self {
        Self {
            version: wire.version,
            title: wire.title,
            home_page_url: wire.home_page_url,
            feed_url: wire.feed_url,
            description: wire.description,
            user_comment: wire.user_comment,
            next_url: wire.next_url,
            icon: wire.icon,
            favicon: wire.favicon,
            authors: merge_authors(wire.authors, wire.author),
            language: wire.language,
            expired: wire.expired,
            hubs: wire.hubs,
            items: wire
                .items
                .map(|items| items.into_iter().map(JsonFeedItem::from).collect()),
        }
    }
}

impl From<JsonFeed> for WireFeed {
    fn from(feed: JsonFeed) -> Self {
        Self {
            version: feed.version,
            title: feed.title,
            user_comment: feed.user_comment,
            home_page_url: feed.home_page_url,
            description: feed.description,
            feed_url: feed.feed_url,
            next_url: feed.next_url,
            icon: feed.icon,
            favicon: feed.favicon,
            language: feed.language,
            expired: feed.expired,
            authors: feed.authors,
            author: None,
            hubs: feed.hubs,
            items: feed
                .items
                .map(|items| items.into_iter().map(WireItem::from).collect()),
        }
    }
}

impl From<WireItem> for JsonFeedItem {
    fn from(wire: WireItem) -> Self {
        Self {
            id: wire.id,
            url: wire.url,
            title: wire.title,
            summary: wire.summary,
            content_html: wire.content_html,
            content_text: wire.content_text,
            date_published: wire.date_published,
            authors: merge_authors(wire.authors, wire.author),
            attachments: wire.attachments,
            tags: wire.tags,
        }
    }
}

impl From<JsonFeedItem> for WireItem {
    fn from(item: JsonFeedItem) -> Self {
        Self {
            id: item.id,
            url: item.url,
            title: item.title,
            summary: item.summary,
            content_html: item.content_html,
            content_text: item.content_text,
            date_published: item.date_published,
            authors: item.authors,
            author: None,
            attachments: item.attachments,
            tags: item.tags,
        }
    }
}
