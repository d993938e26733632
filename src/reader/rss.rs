use crate::app::{FeedError, Result};
use crate::domain::{
    RssCategory, RssCloud, RssEnclosure, RssFeed, RssGuid, RssImage, RssItem,
};

use super::xml::Element;
use super::{decode_title, parse_rfc2822};

pub(super) fn rss_from_element(root: &Element) -> Result<RssFeed> {
    let channel = root
        .child("channel")
        .ok_or_else(|| FeedError::UnsupportedFormat("<rss> without <channel>".into()))?;

    Ok(RssFeed {
        title: channel.child_text("title").map(decode_title),
        link: channel.child_text("link"),
        description: channel.child_text("description"),
        language: channel.child_text("language"),
        web_master: channel.child_text("webMaster"),
        managing_editor: channel.child_text("managingEditor"),
        cloud: channel.child("cloud").map(cloud),
        image: channel.child("image").map(image),
        items: channel.children_named("item").map(item).collect(),
    })
}

fn cloud(element: &Element) -> RssCloud {
    RssCloud {
        domain: element.attr("domain").map(String::from),
        port: element.attr("port").and_then(|p| p.trim().parse().ok()),
        path: element.attr("path").map(String::from),
        register_procedure: element.attr("registerProcedure").map(String::from),
        protocol: element.attr("protocol").map(String::from),
    }
}

fn image(element: &Element) -> RssImage {
    RssImage {
        url: element.child_text("url"),
        title: element.child_text("title"),
        link: element.child_text("link"),
        width: element.child_text("width").and_then(|w| w.parse().ok()),
        height: element.child_text("height").and_then(|h| h.parse().ok()),
    }
}

fn item(element: &Element) -> RssItem {
    RssItem {
        title: element.child_text("title").map(decode_title),
        link: element.child_text("link"),
        description: element.child_text("description"),
        author: element
            .child_text("author")
            .or_else(|| element.child_text("dc:creator")),
        categories: element
            .children_named("category")
            .map(|c| RssCategory {
                value: c.text(),
                domain: c.attr("domain").map(String::from),
            })
            .collect(),
        enclosure: element.child("enclosure").map(|e| RssEnclosure {
            url: e.attr("url").map(String::from),
            length: e.attr("length").map(String::from),
            enclosure_type: e.attr("type").map(String::from),
        }),
        guid: element.child("guid").map(|g| RssGuid {
            value: g.text(),
            is_perma_link: g.attr("isPermaLink").map(|v| v.trim() != "false"),
        }),
        pub_date: element
            .child_text("pubDate")
            .as_deref()
            .and_then(parse_rfc2822),
    }
}
