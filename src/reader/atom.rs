use crate::domain::{AtomEntry, AtomFeed, AtomLink, AtomPerson, AtomText};

use super::xml::Element;
use super::{decode_title, parse_rfc3339};

pub(super) fn atom_from_element(root: &Element) -> AtomFeed {
    AtomFeed {
        title: root.child_text("title").map(decode_title),
        subtitle: root.child("subtitle").map(text_construct),
        links: root.children_named("link").map(link).collect(),
        authors: root.children_named("author").map(person).collect(),
        entries: root.children_named("entry").map(entry).collect(),
        language: root.attr("xml:lang").map(String::from),
        icon: root.child_text("icon"),
        logo: root.child_text("logo"),
    }
}

fn entry(element: &Element) -> AtomEntry {
    AtomEntry {
        id: element.child_text("id"),
        title: element.child_text("title").map(decode_title),
        summary: element.child("summary").map(text_construct),
        links: element.children_named("link").map(link).collect(),
        published: element
            .child_text("published")
            .as_deref()
            .and_then(parse_rfc3339),
        updated: element
            .child_text("updated")
            .as_deref()
            .and_then(parse_rfc3339),
    }
}

fn text_construct(element: &Element) -> AtomText {
    let text_type = element.attr("type");
    let value = match text_type {
        Some("xhtml") => element.xhtml(),
        _ => element.text(),
    };
    AtomText {
        value,
        text_type: text_type.map(String::from),
    }
}

fn link(element: &Element) -> AtomLink {
    AtomLink {
        rel: element.attr("rel").map(String::from),
        href: element.attr("href").map(String::from),
        link_type: element.attr("type").map(String::from),
        length: element.attr("length").map(String::from),
    }
}

fn person(element: &Element) -> AtomPerson {
    AtomPerson {
        name: element.child_text("name"),
        uri: element.child_text("uri"),
        email: element.child_text("email"),
    }
}
