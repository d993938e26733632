use std::sync::OnceLock;

use regex::Regex;

/// A `<`, then any run of quoted segments or characters other than quotes and
/// `>`, then `>`.
const TAG_PATTERN: &str = r#"<("[^"]*"|'[^']*'|[^'">])*>"#;

/// Returns `true` when `text` contains at least one plausible HTML tag.
///
/// The tag may appear anywhere in the text, not only at its boundaries. An
/// empty string is never HTML.
pub fn is_likely_html_fragment(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let re = TAG_RE.get_or_init(|| Regex::new(TAG_PATTERN).unwrap());
    re.is_match(text)
}
