pub mod atom;
pub mod feed;
pub mod json_feed;
pub mod rss;

pub use atom::{AtomEntry, AtomFeed, AtomLink, AtomPerson, AtomText};
pub use feed::Feed;
pub use json_feed::{
    JsonFeed, JsonFeedAttachment, JsonFeedAuthor, JsonFeedHub, JsonFeedItem,
    JSON_FEED_VERSION_1_1,
};
pub use rss::{RssCategory, RssCloud, RssEnclosure, RssFeed, RssGuid, RssImage, RssItem};
