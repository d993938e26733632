use crate::domain::{
    JsonFeed, JsonFeedAttachment, JsonFeedAuthor, JsonFeedHub, JsonFeedItem, RssCloud, RssFeed,
    RssImage, RssItem, JSON_FEED_VERSION_1_1,
};
use crate::html::is_likely_html_fragment;

use super::{non_empty, parse_length, parse_url, NormalizerOptions};

pub(super) fn normalize_rss(rss: &RssFeed, options: &NormalizerOptions) -> JsonFeed {
    let mut feed = JsonFeed {
        version: Some(JSON_FEED_VERSION_1_1.to_string()),
        title: rss.title.clone(),
        description: rss.description.clone(),
        home_page_url: parse_url(rss.link.as_deref()),
        language: rss.language.clone(),
        ..Default::default()
    };

    if let Some(hub) = rss.cloud.as_ref().and_then(cloud_hub) {
        feed.hubs = Some(vec![hub]);
    }

    for name in [&rss.web_master, &rss.managing_editor].into_iter().flatten() {
        feed.authors
            .get_or_insert_with(Vec::new)
            .push(JsonFeedAuthor::named(name.as_str()));
    }

    if let Some(image) = &rss.image {
        if image_is_icon(image, options) {
            feed.icon = parse_url(image.url.as_deref());
        }
    }

    feed.items = non_empty(rss.items.iter().map(rss_item).collect());
    feed
}

/// Builds `domain[:port][path]` verbatim. No scheme is added.
fn cloud_hub(cloud: &RssCloud) -> Option<JsonFeedHub> {
    let domain = cloud.domain.as_deref()?;

    let mut endpoint = domain.to_string();
    if let Some(port) = cloud.port {
        endpoint.push(':');
        endpoint.push_str(&port.to_string());
    }
    if let Some(path) = &cloud.path {
        endpoint.push_str(path);
    }

    Some(JsonFeedHub {
        hub_type: cloud.protocol.clone(),
        url: Some(endpoint),
    })
}

fn image_is_icon(image: &RssImage, options: &NormalizerOptions) -> bool {
    if options.legacy_icon_equality {
        return image.width == image.height;
    }
    matches!((image.width, image.height), (Some(w), Some(h)) if w == h)
}

fn rss_item(item: &RssItem) -> JsonFeedItem {
    let mut out = JsonFeedItem {
        id: item.guid.as_ref().and_then(|g| g.value.clone()),
        url: parse_url(item.link.as_deref()),
        title: item.title.clone(),
        date_published: item.pub_date,
        authors: item
            .author
            .as_deref()
            .map(|name| vec![JsonFeedAuthor::named(name)]),
        attachments: item.enclosure.as_ref().map(|enclosure| {
            vec![JsonFeedAttachment {
                url: parse_url(enclosure.url.as_deref()),
                mime_type: enclosure.enclosure_type.clone(),
                size_in_bytes: enclosure.length.as_deref().and_then(parse_length),
            }]
        }),
        tags: non_empty(
            item.categories
                .iter()
                .filter_map(|c| c.value.clone())
                .collect(),
        ),
        ..Default::default()
    };

    if let Some(description) = item.description.as_deref() {
        let content = description.trim();
        if is_likely_html_fragment(content) {
            out.content_html = Some(content.to_string());
        } else {
            out.content_text = Some(content.to_string());
        }
    }

    out
}
