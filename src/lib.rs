//! # feedmill
//!
//! Normalizes Atom, RSS 2.0 and JSON Feed documents into a single canonical
//! representation, JSON Feed 1.1, and reads/writes that representation in
//! both JSON Feed wire generations (1.0 and 1.1).
//!
//! ## Architecture
//!
//! ```text
//! bytes → Reader → Feed → Normalizer → JsonFeed → Codec → bytes
//! ```
//!
//! - [`reader`]: detects the format and parses raw bytes into a [`domain::Feed`]
//! - [`normalizer`]: maps Atom/RSS/JSON Feed onto [`domain::JsonFeed`]
//! - [`codec`]: JSON Feed 1.0/1.1 decoding, 1.1 encoding
//! - [`html`]: HTML fragment sniffing used to classify RSS descriptions
//!
//! ## Quick Start
//!
//! ```bash
//! # Convert an RSS or Atom file to JSON Feed
//! feedmill convert feed.xml --pretty
//!
//! # Summarize what a feed normalizes to
//! feedmill inspect feed.xml
//! ```
//!
//! ```
//! use feedmill::codec::JsonFeedCodec;
//! use feedmill::domain::{Feed, RssFeed, RssItem};
//! use feedmill::normalizer::Normalizer;
//!
//! let rss = RssFeed {
//!     title: Some("Example".into()),
//!     items: vec![RssItem {
//!         description: Some("  <p>Hello</p>  ".into()),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let feed = Normalizer::new().normalize(&Feed::Rss(rss));
//! let items = feed.items.as_ref().unwrap();
//! assert_eq!(items[0].content_html.as_deref(), Some("<p>Hello</p>"));
//!
//! let bytes = JsonFeedCodec::new().encode(&feed);
//! assert_eq!(JsonFeedCodec::new().decode(&bytes).unwrap(), feed);
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together configuration,
/// reader, normalizer and codec.
pub mod app;

/// Command-line interface using clap.
///
/// - `convert <input>` - Convert a feed to JSON Feed 1.1
/// - `inspect <input>` - Summarize a normalized feed
pub mod cli;

/// JSON Feed encoding and decoding.
///
/// - [`JsonFeedCodec`](codec::JsonFeedCodec): 1.0/1.1 decoder, 1.1 encoder
/// - [`CodecOptions`](codec::CodecOptions): output switches
pub mod codec;

/// Configuration loaded from `~/.config/feedmill/config.toml`.
pub mod config;

/// Feed models.
///
/// - [`Feed`](domain::Feed): Atom, RSS or JSON Feed input
/// - [`JsonFeed`](domain::JsonFeed): canonical output
pub mod domain;

/// HTML fragment detection.
pub mod html;

/// Feed normalization.
///
/// Converts Atom 1.0, RSS 2.0 and JSON Feed into [`JsonFeed`](domain::JsonFeed).
pub mod normalizer;

/// Raw bytes to [`Feed`](domain::Feed).
pub mod reader;
