use crate::domain::{
    AtomEntry, AtomFeed, JsonFeed, JsonFeedAttachment, JsonFeedAuthor, JsonFeedHub, JsonFeedItem,
    JSON_FEED_VERSION_1_1,
};

use super::{non_empty, parse_length, parse_url, NormalizerOptions};

pub(super) fn normalize_atom(atom: &AtomFeed, options: &NormalizerOptions) -> JsonFeed {
    let mut feed = JsonFeed {
        version: Some(JSON_FEED_VERSION_1_1.to_string()),
        title: atom.title.clone(),
        description: atom.subtitle.as_ref().and_then(|s| s.value.clone()),
        language: atom.language.clone(),
        icon: parse_url(atom.logo.as_deref()),
        favicon: parse_url(atom.icon.as_deref()),
        ..Default::default()
    };

    for link in &atom.links {
        if link.is_alternate() {
            // Several alternates: the last parseable one wins.
            if let Some(url) = parse_url(link.href.as_deref()) {
                feed.home_page_url = Some(url);
            }
        } else if link.has_rel("self") {
            if let Some(url) = parse_url(link.href.as_deref()) {
                feed.feed_url = Some(url);
            }
        } else if link.has_rel("hub") {
            let hubs = feed.hubs.get_or_insert_with(Vec::new);
            if let Some(href) = link.href.as_deref().map(str::trim).filter(|h| !h.is_empty()) {
                hubs.push(JsonFeedHub {
                    hub_type: None,
                    url: Some(href.to_string()),
                });
            }
        }
    }

    // Entries carry no authors of their own here; every item gets the feed's.
    let authors = non_empty(
        atom.authors
            .iter()
            .map(|person| JsonFeedAuthor {
                name: person.name.clone(),
                url: parse_url(person.uri.as_deref()),
            })
            .collect(),
    );

    let items: Vec<JsonFeedItem> = atom
        .entries
        .iter()
        .map(|entry| entry_to_item(entry, authors.as_ref()))
        .collect();

    if options.legacy_atom_items {
        tracing::debug!(
            entries = items.len(),
            "Legacy mode: Atom entries are not attached to items"
        );
    } else {
        feed.items = non_empty(items);
    }

    feed
}

fn entry_to_item(entry: &AtomEntry, authors: Option<&Vec<JsonFeedAuthor>>) -> JsonFeedItem {
    let attachments: Vec<JsonFeedAttachment> = entry
        .links
        .iter()
        .filter(|link| link.has_rel("enclosure"))
        .map(|link| JsonFeedAttachment {
            url: parse_url(link.href.as_deref()),
            mime_type: link.link_type.clone(),
            size_in_bytes: link.length.as_deref().and_then(parse_length),
        })
        .collect();

    JsonFeedItem {
        id: entry.id.clone(),
        url: entry
            .links
            .iter()
            .find(|link| link.is_alternate())
            .and_then(|link| parse_url(link.href.as_deref())),
        title: entry.title.clone(),
        // Only the text; the construct's `type` attribute is not kept.
        summary: entry.summary.as_ref().and_then(|s| s.value.clone()),
        date_published: entry.published.or(entry.updated),
        authors: authors.cloned(),
        attachments: non_empty(attachments),
        ..Default::default()
    }
}
