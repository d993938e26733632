use crate::domain::{AtomFeed, JsonFeed, RssFeed};

/// A parsed feed in one of the supported source formats.
#[derive(Debug, Clone, PartialEq)]
pub enum Feed {
    Atom(AtomFeed),
    Rss(RssFeed),
    Json(JsonFeed),
}

impl Feed {
    pub fn format_name(&self) -> &'static str {
        match self {
            Feed::Atom(_) => "Atom",
            Feed::Rss(_) => "RSS 2.0",
            Feed::Json(_) => "JSON Feed",
        }
    }
}

impl From<AtomFeed> for Feed {
    fn from(feed: AtomFeed) -> Self {
        Feed::Atom(feed)
    }
}

impl From<RssFeed> for Feed {
    fn from(feed: RssFeed) -> Self {
        Feed::Rss(feed)
    }
}

impl From<JsonFeed> for Feed {
    fn from(feed: JsonFeed) -> Self {
        Feed::Json(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_name() {
        assert_eq!(Feed::from(AtomFeed::default()).format_name(), "Atom");
        assert_eq!(Feed::from(RssFeed::default()).format_name(), "RSS 2.0");
        assert_eq!(Feed::from(JsonFeed::default()).format_name(), "JSON Feed");
    }
}
