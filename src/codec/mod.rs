//! JSON Feed wire format.
//!
//! Decoding accepts both the 1.0 and the 1.1 layouts. Encoding always writes
//! the 1.1 layout; absent fields are left out of the document.

mod wire;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::app::{FeedError, Result};
use crate::domain::JsonFeed;

use wire::WireFeed;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Leave `items` and `language` out of encoded documents, like the legacy
    /// encoder did. Decoding is unaffected.
    pub legacy_omit_items: bool,
    /// Indent encoded documents.
    pub pretty: bool,
}

#[derive(Debug, Clone, Default)]
pub struct JsonFeedCodec {
    options: CodecOptions,
}

impl JsonFeedCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn encode(&self, feed: &JsonFeed) -> Vec<u8> {
        let mut wire = WireFeed::from(feed.clone());
        if self.options.legacy_omit_items {
            wire.items = None;
            wire.language = None;
        }

        let encoded = if self.options.pretty {
            serde_json::to_vec_pretty(&wire)
        } else {
            serde_json::to_vec(&wire)
        };
        encoded.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to serialize JSON Feed");
            Vec::new()
        })
    }

    /// Decodes a JSON Feed 1.0 or 1.1 document.
    ///
    /// A singular 1.0 `author` replaces any `authors` array found in the same
    /// object, for the feed and for each item.
    pub fn decode(&self, bytes: &[u8]) -> Result<JsonFeed> {
        // Going through a map first rejects top-level arrays, which serde's
        // derived struct visitor would otherwise accept.
        let object: Map<String, Value> =
            serde_json::from_slice(bytes).map_err(FeedError::MalformedDocument)?;
        let wire: WireFeed = serde_json::from_value(Value::Object(object))
            .map_err(FeedError::MalformedDocument)?;
        Ok(wire.into())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::domain::{
        JsonFeedAttachment, JsonFeedAuthor, JsonFeedHub, JsonFeedItem, JSON_FEED_VERSION_1_1,
    };

    fn full_feed() -> JsonFeed {
        JsonFeed {
            version: Some(JSON_FEED_VERSION_1_1.into()),
            title: Some("My Example Feed".into()),
            home_page_url: Some("https://example.org/".parse().unwrap()),
            feed_url: Some("https://example.org/feed.json".parse().unwrap()),
            description: Some("Examples".into()),
            user_comment: Some("Ignore me".into()),
            next_url: Some("https://example.org/feed.json?page=2".parse().unwrap()),
            icon: Some("https://example.org/icon.png".parse().unwrap()),
            favicon: Some("https://example.org/favicon.ico".parse().unwrap()),
            authors: Some(vec![JsonFeedAuthor {
                name: Some("Alice".into()),
                url: Some("https://example.org/alice".parse().unwrap()),
            }]),
            language: Some("en-US".into()),
            expired: Some(false),
            hubs: Some(vec![JsonFeedHub {
                hub_type: Some("WebSub".into()),
                url: Some("https://hub.example.org/".into()),
            }]),
            items: Some(vec![JsonFeedItem {
                id: Some("2".into()),
                url: Some("https://example.org/second-item".parse().unwrap()),
                title: Some("Second".into()),
                summary: Some("Short".into()),
                content_html: Some("<p>Hello, world!</p>".into()),
                content_text: None,
                date_published: Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()),
                authors: Some(vec![JsonFeedAuthor::named("Bob")]),
                attachments: Some(vec![JsonFeedAttachment {
                    url: Some("https://example.org/ep.mp3".parse().unwrap()),
                    mime_type: Some("audio/mpeg".into()),
                    size_in_bytes: Some(12345),
                }]),
                tags: Some(vec!["rust".into()]),
            }]),
        }
    }

    fn encode_to_value(codec: &JsonFeedCodec, feed: &JsonFeed) -> Value {
        serde_json::from_slice(&codec.encode(feed)).unwrap()
    }

    #[test]
    fn test_round_trip_keeps_every_field() {
        let codec = JsonFeedCodec::new();
        let feed = full_feed();

        let decoded = codec.decode(&codec.encode(&feed)).unwrap();
        assert_eq!(decoded, feed);
    }

    #[test]
    fn test_legacy_round_trip_loses_items_and_language() {
        let codec = JsonFeedCodec::with_options(CodecOptions {
            legacy_omit_items: true,
            ..Default::default()
        });
        let feed = full_feed();

        let decoded = codec.decode(&codec.encode(&feed)).unwrap();
        assert!(feed.items.is_some());
        assert!(feed.language.is_some());
        assert_eq!(decoded.items, None);
        assert_eq!(decoded.language, None);
        assert_ne!(decoded, feed);

        let expected = JsonFeed {
            items: None,
            language: None,
            ..feed
        };
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_encode_uses_1_1_field_names() {
        let value = encode_to_value(&JsonFeedCodec::new(), &full_feed());
        let object = value.as_object().unwrap();

        for key in [
            "version",
            "title",
            "user_comment",
            "home_page_url",
            "description",
            "feed_url",
            "next_url",
            "icon",
            "favicon",
            "expired",
            "authors",
            "hubs",
            "items",
            "language",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert!(!object.contains_key("author"));
        assert_eq!(value["hubs"][0]["type"], json!("WebSub"));
        assert_eq!(value["items"][0]["content_html"], json!("<p>Hello, world!</p>"));
        assert_eq!(value["items"][0]["date_published"], json!("2024-03-01T08:00:00Z"));
        assert_eq!(value["items"][0]["attachments"][0]["size_in_bytes"], json!(12345));
        assert_eq!(value["items"][0]["attachments"][0]["mime_type"], json!("audio/mpeg"));
    }

    #[test]
    fn test_encode_omits_absent_fields() {
        let feed = JsonFeed {
            title: Some("Only a title".into()),
            ..Default::default()
        };
        let value = encode_to_value(&JsonFeedCodec::new(), &feed);

        assert_eq!(value, json!({ "title": "Only a title" }));
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let codec = JsonFeedCodec::with_options(CodecOptions {
            pretty: true,
            ..Default::default()
        });
        let text = String::from_utf8(codec.encode(&full_feed())).unwrap();

        assert!(text.contains("\n  \"title\""));
        assert_eq!(codec.decode(text.as_bytes()).unwrap(), full_feed());
    }

    #[test]
    fn test_decode_1_0_singular_author() {
        let doc = br#"{"version":"https://jsonfeed.org/version/1.1","author":{"name":"Alice"}}"#;
        let feed = JsonFeedCodec::new().decode(doc).unwrap();

        assert_eq!(feed.authors, Some(vec![JsonFeedAuthor::named("Alice")]));
    }

    #[test]
    fn test_decode_singular_author_wins_over_authors() {
        let doc = br#"{"authors":[{"name":"Bob"}],"author":{"name":"Alice"}}"#;
        let feed = JsonFeedCodec::new().decode(doc).unwrap();

        assert_eq!(feed.authors, Some(vec![JsonFeedAuthor::named("Alice")]));
    }

    #[test]
    fn test_decode_item_singular_author() {
        let doc = br#"{
            "version": "https://jsonfeed.org/version/1",
            "items": [
                {"id": "1", "author": {"name": "Carol", "url": "https://example.org/carol"}},
                {"id": "2", "authors": [{"name": "Dave"}]}
            ]
        }"#;
        let feed = JsonFeedCodec::new().decode(doc).unwrap();
        let items = feed.items.unwrap();

        assert_eq!(feed.version.as_deref(), Some("https://jsonfeed.org/version/1"));
        assert_eq!(
            items[0].authors,
            Some(vec![JsonFeedAuthor {
                name: Some("Carol".into()),
                url: Some("https://example.org/carol".parse().unwrap()),
            }])
        );
        assert_eq!(items[1].authors, Some(vec![JsonFeedAuthor::named("Dave")]));
    }

    #[test]
    fn test_decode_empty_object() {
        let feed = JsonFeedCodec::new().decode(b"{}").unwrap();
        assert_eq!(feed, JsonFeed::default());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let doc = br#"{"title":"T","_custom":{"x":1},"items":[{"id":"1","image":"https://example.org/a.png"}]}"#;
        let feed = JsonFeedCodec::new().decode(doc).unwrap();

        assert_eq!(feed.title.as_deref(), Some("T"));
        assert_eq!(feed.item_count(), 1);
    }

    #[test]
    fn test_decode_null_fields_are_absent() {
        let doc = br#"{"title":null,"authors":null,"expired":null}"#;
        let feed = JsonFeedCodec::new().decode(doc).unwrap();

        assert_eq!(feed, JsonFeed::default());
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let docs: [&[u8]; 5] = [b"[]", b"\"feed\"", b"42", b"not json", b""];
        for doc in docs {
            let err = JsonFeedCodec::new().decode(doc).unwrap_err();
            assert!(matches!(err, FeedError::MalformedDocument(_)));
        }
    }

    #[test]
    fn test_decode_rejects_mistyped_field() {
        let err = JsonFeedCodec::new()
            .decode(br#"{"expired":"yes"}"#)
            .unwrap_err();
        assert!(matches!(err, FeedError::MalformedDocument(_)));

        let err = JsonFeedCodec::new()
            .decode(br#"{"items":[{"attachments":[{"size_in_bytes":"big"}]}]}"#)
            .unwrap_err();
        assert!(matches!(err, FeedError::MalformedDocument(_)));
    }

    #[test]
    fn test_decode_rejects_invalid_url() {
        let err = JsonFeedCodec::new()
            .decode(br#"{"home_page_url":"not a url"}"#)
            .unwrap_err();
        assert!(matches!(err, FeedError::MalformedDocument(_)));
    }

    #[test]
    fn test_encode_empty_feed_is_empty_object() {
        assert_eq!(JsonFeedCodec::new().encode(&JsonFeed::default()), b"{}");
    }

    #[test]
    fn test_decode_keeps_scheme_less_hub_url() {
        let codec = JsonFeedCodec::new();
        let feed = codec
            .decode(br#"{"hubs":[{"type":"xml-rpc","url":"RPC.Example.com:80/rpc"}]}"#)
            .unwrap();
        let hubs = feed.hubs.as_ref().unwrap();

        assert_eq!(hubs[0].url.as_deref(), Some("RPC.Example.com:80/rpc"));
        assert_eq!(codec.decode(&codec.encode(&feed)).unwrap(), feed);
    }
}
